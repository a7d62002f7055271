//! Artist resource.

use serde::{Deserialize, Serialize};

/// A Spotify artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// The Spotify ID of the artist.
    pub id: String,

    /// The artist's display name.
    pub name: String,
}
