//! Artist catalog endpoints: artist lookup, album listing, album tracks.

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::{Artist, Page, SimplifiedAlbum, SimplifiedTrack};

/// Page size for album listings (API maximum is 50).
const ALBUM_PAGE_LIMIT: u32 = 50;

/// Page size for album track listings (API maximum is 50).
const TRACK_PAGE_LIMIT: u32 = 50;

/// Album groups fetched from an artist's catalog.
///
/// The sync targets single releases; full albums and compilations are out
/// of scope for the playlists this tool maintains.
const ALBUM_INCLUDE_GROUPS: &str = "single";

impl SpotifyClient {
    /// Fetches an artist by ID.
    pub async fn artist(&self, artist_id: &str) -> Result<Artist> {
        self.get(&format!("/artists/{artist_id}")).await
    }

    /// Fetches all of an artist's albums (single releases, newest first).
    ///
    /// Pages through the listing 50 albums at a time until a short or
    /// empty page signals the end.
    pub async fn artist_albums(&self, artist_id: &str) -> Result<Vec<SimplifiedAlbum>> {
        let mut albums = Vec::new();
        let mut offset: u32 = 0;

        loop {
            let endpoint = format!(
                "/artists/{artist_id}/albums?include_groups={ALBUM_INCLUDE_GROUPS}&limit={ALBUM_PAGE_LIMIT}&offset={offset}"
            );
            let page: Page<SimplifiedAlbum> = self.get(&endpoint).await?;

            let count = page.items.len() as u32;
            if count == 0 {
                break;
            }

            albums.extend(page.items);
            offset += count;

            if count < ALBUM_PAGE_LIMIT {
                break;
            }
        }

        Ok(albums)
    }

    /// Fetches all tracks of an album.
    pub async fn album_tracks(&self, album_id: &str) -> Result<Vec<SimplifiedTrack>> {
        let mut tracks = Vec::new();
        let mut offset: u32 = 0;

        loop {
            let endpoint =
                format!("/albums/{album_id}/tracks?limit={TRACK_PAGE_LIMIT}&offset={offset}");
            let page: Page<SimplifiedTrack> = self.get(&endpoint).await?;

            let count = page.items.len() as u32;
            if count == 0 {
                break;
            }

            tracks.extend(page.items);
            offset += count;

            if count < TRACK_PAGE_LIMIT {
                break;
            }
        }

        Ok(tracks)
    }
}
