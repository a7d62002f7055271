//! Playlist endpoints: metadata, item listing, batched track addition.

use std::collections::HashSet;

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::models::{AddTracksRequest, Page, Playlist, PlaylistItem, SnapshotId};

/// Page size for playlist item listings (API maximum is 100).
const PLAYLIST_PAGE_LIMIT: u32 = 100;

/// Maximum number of track URIs per add request (API limit).
const ADD_BATCH_SIZE: usize = 100;

impl SpotifyClient {
    /// Fetches a playlist's identifying metadata.
    pub async fn playlist(&self, playlist_id: &str) -> Result<Playlist> {
        self.get(&format!("/playlists/{playlist_id}?fields=id,name"))
            .await
    }

    /// Fetches the IDs of every track currently in a playlist.
    ///
    /// Entries without a catalog ID (local files, unresolvable items) are
    /// skipped; the returned set therefore may be smaller than the
    /// playlist's reported total.
    pub async fn playlist_track_ids(&self, playlist_id: &str) -> Result<HashSet<String>> {
        let mut track_ids = HashSet::new();
        let mut offset: usize = 0;

        loop {
            let endpoint = format!(
                "/playlists/{playlist_id}/tracks?fields=items(track(id)),total,limit,offset&limit={PLAYLIST_PAGE_LIMIT}&offset={offset}"
            );
            let page: Page<PlaylistItem> = self.get(&endpoint).await?;

            let count = page.items.len();
            track_ids.extend(
                page.items
                    .into_iter()
                    .filter_map(|item| item.track.and_then(|track| track.id)),
            );

            offset += count;
            if count == 0 || offset >= page.total as usize {
                break;
            }
        }

        Ok(track_ids)
    }

    /// Appends tracks to a playlist, batching 100 URIs per request.
    ///
    /// Requires a user-scoped token (refresh-token grant).
    pub async fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        track_ids: &[String],
    ) -> Result<()> {
        for batch in track_ids.chunks(ADD_BATCH_SIZE) {
            let request = AddTracksRequest {
                uris: batch
                    .iter()
                    .map(|id| format!("spotify:track:{id}"))
                    .collect(),
            };
            let _snapshot: SnapshotId = self
                .post(&format!("/playlists/{playlist_id}/tracks"), &request)
                .await?;
        }

        Ok(())
    }
}
