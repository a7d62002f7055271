//! Local track cache and search expressions for Spotify catalog sync.
//!
//! This crate holds the pieces of the sync pipeline that live between the
//! API client and the CLI:
//!
//! - [`TrackCache`] / [`CacheStore`] - one JSON file per artist with the
//!   flattened track list and a refresh timestamp.
//! - [`TrackSync`] - fetches an artist's catalog, using the cache for
//!   incremental "new releases since last update" refreshes.
//! - [`search`] - the boolean search-expression parser, evaluator, and the
//!   keyword matcher that filters track titles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod search;

mod merge;
mod store;
mod sync;

pub use store::{CacheStore, CacheStoreError};
pub use sync::{RefreshSummary, SyncError, TrackSync};

pub(crate) use merge::{merge_tracks, sort_by_release_date};

/// One track of an artist's catalog, as cached and filtered.
///
/// This is the flattened record the pipeline works with: the track's
/// identity, the title that search expressions match against, and the
/// release date of the album it came from (`YYYY`, `YYYY-MM`, or
/// `YYYY-MM-DD` precision, as the catalog reports it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTrack {
    /// The Spotify ID of the track.
    pub id: String,

    /// The track title.
    pub name: String,

    /// Release date of the containing album.
    pub release_date: String,
}

impl CatalogTrack {
    /// Creates a new catalog track record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        release_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            release_date: release_date.into(),
        }
    }
}

/// The cached catalog of one artist.
///
/// Serialized as `<cache-dir>/<artist_id>.json`. `last_updated` is the
/// cutoff for the next incremental refresh: only albums released after it
/// are fetched again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackCache {
    /// The artist this cache belongs to.
    pub artist_id: String,

    /// When the cached track list was last written.
    pub last_updated: DateTime<Utc>,

    /// The artist's tracks, ascending by release date.
    #[serde(default)]
    pub tracks: Vec<CatalogTrack>,
}

impl TrackCache {
    /// Creates a cache snapshot stamped with the current time.
    pub fn new(artist_id: impl Into<String>, tracks: Vec<CatalogTrack>) -> Self {
        Self {
            artist_id: artist_id.into(),
            last_updated: Utc::now(),
            tracks,
        }
    }
}
