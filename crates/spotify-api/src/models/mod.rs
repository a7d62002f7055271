//! Data models for Spotify Web API resources.
//!
//! Only the fields this crate actually consumes are modeled; the API
//! returns many more, which serde ignores.

mod album;
mod artist;
mod page;
mod playlist;
mod track;

pub use album::SimplifiedAlbum;
pub use artist::Artist;
pub use page::Page;
pub use playlist::{AddTracksRequest, Playlist, PlaylistItem, PlaylistTrackRef, SnapshotId};
pub use track::SimplifiedTrack;
