//! Track resources as returned by the album-tracks endpoint.

use serde::{Deserialize, Serialize};

/// A simplified track, as listed under an album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedTrack {
    /// The Spotify ID of the track.
    pub id: String,

    /// The track title.
    pub name: String,

    /// Position on the album.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_number: Option<u32>,

    /// Track length in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}
