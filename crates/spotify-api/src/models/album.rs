//! Album resources as returned by the artist-albums endpoint.

use serde::{Deserialize, Serialize};

/// A simplified album, as listed under an artist.
///
/// `release_date` carries whatever precision the catalog has for the
/// release: `YYYY`, `YYYY-MM`, or `YYYY-MM-DD` (see
/// `release_date_precision`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedAlbum {
    /// The Spotify ID of the album.
    pub id: String,

    /// The album title.
    pub name: String,

    /// The release date, at `release_date_precision` granularity.
    pub release_date: String,

    /// "year", "month", or "day".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date_precision: Option<String>,

    /// "album", "single", or "compilation".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_type: Option<String>,

    /// Number of tracks on the album.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tracks: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_deserializes_minimal() {
        let json = r#"{
            "id": "5ht7ItJgpBH7W6vJ5BqpPr",
            "name": "Night Visions",
            "release_date": "2012-09-04"
        }"#;
        let album: SimplifiedAlbum = serde_json::from_str(json).unwrap();
        assert_eq!(album.name, "Night Visions");
        assert_eq!(album.release_date, "2012-09-04");
        assert!(album.release_date_precision.is_none());
    }

    #[test]
    fn test_album_deserializes_year_precision() {
        let json = r#"{
            "id": "abc",
            "name": "Early Demos",
            "release_date": "1998",
            "release_date_precision": "year",
            "album_type": "single",
            "total_tracks": 2
        }"#;
        let album: SimplifiedAlbum = serde_json::from_str(json).unwrap();
        assert_eq!(album.release_date, "1998");
        assert_eq!(album.release_date_precision.as_deref(), Some("year"));
        assert_eq!(album.total_tracks, Some(2));
    }
}
