//! Playlist resources.

use serde::{Deserialize, Serialize};

/// A playlist's identifying metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// The Spotify ID of the playlist.
    pub id: String,

    /// The playlist name.
    pub name: String,
}

/// One entry of a playlist's item listing.
///
/// `track` is null for entries the caller cannot resolve (removed
/// episodes, region-blocked content).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// The track occupying this playlist position, if resolvable.
    #[serde(default)]
    pub track: Option<PlaylistTrackRef>,
}

/// Reference to a track inside a playlist item.
///
/// `id` is null for local files, which have no catalog identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistTrackRef {
    /// The Spotify ID of the track, absent for local files.
    #[serde(default)]
    pub id: Option<String>,
}

/// Request body for adding tracks to a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTracksRequest {
    /// Track URIs (`spotify:track:<id>`), at most 100 per request.
    pub uris: Vec<String>,
}

/// Response body of a playlist mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotId {
    /// The playlist version after the mutation.
    pub snapshot_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_item_with_null_track() {
        let json = r#"{"track": null}"#;
        let item: PlaylistItem = serde_json::from_str(json).unwrap();
        assert!(item.track.is_none());
    }

    #[test]
    fn test_playlist_item_with_local_track() {
        let json = r#"{"track": {"id": null, "name": "Home recording"}}"#;
        let item: PlaylistItem = serde_json::from_str(json).unwrap();
        assert!(item.track.unwrap().id.is_none());
    }

    #[test]
    fn test_add_tracks_request_serializes() {
        let request = AddTracksRequest {
            uris: vec!["spotify:track:abc".to_string()],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"uris":["spotify:track:abc"]}"#);
    }
}
