//! Catalog refresh with incremental cache updates.
//!
//! [`TrackSync`] owns an API client and a [`CacheStore`] and produces an
//! artist's flattened track list. On a cache hit it only fetches albums
//! released after the cache's `last_updated` stamp and merges their
//! tracks in; on a miss it fetches the full catalog and seeds the cache.
//!
//! # Example
//!
//! ```no_run
//! use spotify_api_rs::client::SpotifyClient;
//! use spotify_cache_rs::{CacheStore, TrackSync};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SpotifyClient::new("access-token");
//! let store = CacheStore::new()?;
//! let sync = TrackSync::new(client, store);
//!
//! let (tracks, summary) = sync.artist_tracks("artist-id").await?;
//! println!("{} tracks ({} new)", tracks.len(), summary.new_tracks);
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use spotify_api_rs::client::SpotifyClient;
use spotify_api_rs::models::SimplifiedAlbum;

use crate::{merge_tracks, sort_by_release_date, CacheStore, CacheStoreError, CatalogTrack, TrackCache};

/// Errors that can occur while refreshing an artist's catalog.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// API error.
    #[error("API error: {0}")]
    Api(#[from] spotify_api_rs::error::Error),

    /// Cache storage error.
    #[error("cache error: {0}")]
    Cache(#[from] CacheStoreError),
}

/// Result type for sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;

/// How an artist's track list was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSummary {
    /// True when a cache file supplied the baseline track list.
    pub from_cache: bool,

    /// Tracks added beyond the cached baseline (equals `total` on a
    /// full fetch).
    pub new_tracks: usize,

    /// Total tracks in the returned list.
    pub total: usize,
}

/// Fetches artist catalogs, caching track lists per artist.
pub struct TrackSync {
    /// The Spotify API client.
    client: SpotifyClient,

    /// The cache storage.
    store: CacheStore,

    /// Whether the store is consulted and updated at all.
    use_cache: bool,
}

impl TrackSync {
    /// Creates a new `TrackSync` with caching enabled.
    pub fn new(client: SpotifyClient, store: CacheStore) -> Self {
        Self {
            client,
            store,
            use_cache: true,
        }
    }

    /// Creates a new `TrackSync` that bypasses the cache entirely:
    /// every call fetches from the API and nothing is written to disk.
    pub fn without_cache(client: SpotifyClient, store: CacheStore) -> Self {
        Self {
            client,
            store,
            use_cache: false,
        }
    }

    /// Returns a reference to the API client.
    pub fn client(&self) -> &SpotifyClient {
        &self.client
    }

    /// Returns a reference to the cache store.
    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Returns the artist's full track list, ascending by release date.
    ///
    /// With caching enabled, a cache hit triggers an incremental fetch of
    /// albums released after the cache's `last_updated` stamp; the cache
    /// file is rewritten only when the merge actually added tracks. A
    /// cache miss (including a corrupt cache file) fetches the full
    /// catalog and seeds the cache.
    pub async fn artist_tracks(
        &self,
        artist_id: &str,
    ) -> Result<(Vec<CatalogTrack>, RefreshSummary)> {
        if !self.use_cache {
            let tracks = self.fetch_all(artist_id).await?;
            let total = tracks.len();
            return Ok((
                tracks,
                RefreshSummary {
                    from_cache: false,
                    new_tracks: total,
                    total,
                },
            ));
        }

        match self.store.load(artist_id)? {
            Some(cache) => {
                let fetched = self.fetch_since(artist_id, cache.last_updated).await?;
                let cached_count = cache.tracks.len();
                let merged = merge_tracks(cache.tracks, fetched);
                let new_tracks = merged.len() - cached_count;

                if new_tracks > 0 {
                    self.store.save(&TrackCache::new(artist_id, merged.clone()))?;
                }

                let total = merged.len();
                Ok((
                    merged,
                    RefreshSummary {
                        from_cache: true,
                        new_tracks,
                        total,
                    },
                ))
            }
            None => {
                let tracks = self.fetch_all(artist_id).await?;
                self.store.save(&TrackCache::new(artist_id, tracks.clone()))?;

                let total = tracks.len();
                Ok((
                    tracks,
                    RefreshSummary {
                        from_cache: false,
                        new_tracks: total,
                        total,
                    },
                ))
            }
        }
    }

    /// Fetches the artist's entire catalog from the API.
    async fn fetch_all(&self, artist_id: &str) -> Result<Vec<CatalogTrack>> {
        let albums = self.client.artist_albums(artist_id).await?;
        let mut tracks = self.tracks_from_albums(&albums).await?;
        sort_by_release_date(&mut tracks);
        Ok(tracks)
    }

    /// Fetches only the tracks of albums released after `cutoff`.
    async fn fetch_since(
        &self,
        artist_id: &str,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<CatalogTrack>> {
        let albums = self.client.artist_albums(artist_id).await?;
        let recent = albums_released_after(albums, cutoff);

        if recent.is_empty() {
            return Ok(Vec::new());
        }

        self.tracks_from_albums(&recent).await
    }

    /// Flattens albums into catalog track records.
    async fn tracks_from_albums(&self, albums: &[SimplifiedAlbum]) -> Result<Vec<CatalogTrack>> {
        let mut tracks = Vec::new();

        for album in albums {
            let album_tracks = self.client.album_tracks(&album.id).await?;
            tracks.extend(album_tracks.into_iter().map(|track| {
                CatalogTrack::new(track.id, track.name, album.release_date.clone())
            }));
        }

        Ok(tracks)
    }
}

/// Keeps the albums released strictly after `cutoff`.
///
/// Albums arrive newest first, so the scan stops at the first album at or
/// before the cutoff. Albums with unparsable release dates are skipped
/// without ending the scan.
fn albums_released_after(
    albums: Vec<SimplifiedAlbum>,
    cutoff: DateTime<Utc>,
) -> Vec<SimplifiedAlbum> {
    let mut recent = Vec::new();

    for album in albums {
        match release_datetime(&album.release_date) {
            Some(released) if released > cutoff => recent.push(album),
            Some(_) => break,
            None => continue,
        }
    }

    recent
}

/// Parses a release date of any catalog precision (`YYYY`, `YYYY-MM`,
/// `YYYY-MM-DD`) as midnight UTC, defaulting missing components to 1.
fn release_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let mut parts = raw.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next().map_or(Some(1), |m| m.parse().ok())?;
    let day: u32 = parts.next().map_or(Some(1), |d| d.parse().ok())?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}
