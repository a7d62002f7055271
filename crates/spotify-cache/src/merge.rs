//! Merging freshly fetched tracks into a cached track list.

use crate::CatalogTrack;

/// Merges newly fetched tracks into a cached list, deduplicating by id.
///
/// Cached entries win: a fetched track whose id is already cached is
/// dropped. When nothing new survives the dedup, the cached list is
/// returned unchanged (callers use this to skip a cache write). Otherwise
/// the combined list is re-sorted by release date.
pub(crate) fn merge_tracks(
    cached: Vec<CatalogTrack>,
    fetched: Vec<CatalogTrack>,
) -> Vec<CatalogTrack> {
    let existing_ids: std::collections::HashSet<&str> =
        cached.iter().map(|track| track.id.as_str()).collect();

    let mut new_tracks: Vec<CatalogTrack> = fetched
        .into_iter()
        .filter(|track| !existing_ids.contains(track.id.as_str()))
        .collect();

    if new_tracks.is_empty() {
        return cached;
    }

    let mut merged = cached;
    merged.append(&mut new_tracks);
    sort_by_release_date(&mut merged);
    merged
}

/// Sorts tracks ascending by release date.
///
/// Release dates are ISO-ordered strings (`YYYY` < `YYYY-MM` <
/// `YYYY-MM-DD` within the same year prefix), so a plain lexicographic
/// sort gives chronological order. The sort is stable: tracks sharing a
/// release date keep their album track order.
pub(crate) fn sort_by_release_date(tracks: &mut [CatalogTrack]) {
    tracks.sort_by(|a, b| a.release_date.cmp(&b.release_date));
}
