//! Integration tests for cache storage workflows.

use spotify_cache_rs::{CacheStore, CatalogTrack, TrackCache};

#[test]
fn test_multiple_artists_get_separate_files() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let store = CacheStore::with_dir(temp_dir.path());

    store
        .save(&TrackCache::new(
            "artist-a",
            vec![CatalogTrack::new("a1", "Alpha", "2024-01-01")],
        ))
        .expect("save a failed");
    store
        .save(&TrackCache::new(
            "artist-b",
            vec![CatalogTrack::new("b1", "Beta", "2024-02-01")],
        ))
        .expect("save b failed");

    let a = store.load("artist-a").unwrap().expect("a missing");
    let b = store.load("artist-b").unwrap().expect("b missing");
    assert_eq!(a.tracks[0].name, "Alpha");
    assert_eq!(b.tracks[0].name, "Beta");
}

#[test]
fn test_resave_replaces_previous_snapshot() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let store = CacheStore::with_dir(temp_dir.path());

    store
        .save(&TrackCache::new(
            "artist-a",
            vec![CatalogTrack::new("a1", "Alpha", "2024-01-01")],
        ))
        .expect("first save failed");

    store
        .save(&TrackCache::new(
            "artist-a",
            vec![
                CatalogTrack::new("a1", "Alpha", "2024-01-01"),
                CatalogTrack::new("a2", "Alpha II", "2024-06-01"),
            ],
        ))
        .expect("second save failed");

    let loaded = store.load("artist-a").unwrap().expect("cache missing");
    assert_eq!(loaded.tracks.len(), 2);
}

#[test]
fn test_clear_then_reload_is_miss() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let dir = temp_dir.path().join("tracks");
    let store = CacheStore::with_dir(&dir);

    store
        .save(&TrackCache::new("artist-a", vec![]))
        .expect("save failed");
    assert!(store.exists("artist-a"));

    store.clear().expect("clear failed");
    assert!(!store.exists("artist-a"));
    assert!(store.load("artist-a").unwrap().is_none());
}

#[test]
fn test_cache_file_is_human_readable_json() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let store = CacheStore::with_dir(temp_dir.path());

    store
        .save(&TrackCache::new(
            "artist-a",
            vec![CatalogTrack::new("a1", "Alpha", "2024-01-01")],
        ))
        .expect("save failed");

    let raw = std::fs::read_to_string(store.path_for("artist-a")).unwrap();
    assert!(raw.contains("\"artist_id\": \"artist-a\""));
    assert!(raw.contains("\"last_updated\""));
    assert!(raw.contains("\"Alpha\""));
}
