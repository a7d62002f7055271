//! Integration tests for the catalog endpoints against a mock server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use spotify_api_rs::error::{ApiError, Error};
use spotify_api_rs::client::SpotifyClient;

fn album_json(id: &str, name: &str, release_date: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "release_date": release_date,
        "release_date_precision": "day",
        "album_type": "single",
        "total_tracks": 1
    })
}

#[tokio::test]
async fn test_artist_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artists/0OdUWJ0sBjDrqHygGUXeCF"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "0OdUWJ0sBjDrqHygGUXeCF",
            "name": "Band of Horses"
        })))
        .mount(&server)
        .await;

    let client = SpotifyClient::with_base_url("test-token", server.uri());
    let artist = client.artist("0OdUWJ0sBjDrqHygGUXeCF").await.unwrap();

    assert_eq!(artist.name, "Band of Horses");
}

#[tokio::test]
async fn test_artist_albums_paginates_until_short_page() {
    let server = MockServer::start().await;

    // First page: a full 50 albums, so the client must ask for more.
    let first_page: Vec<_> = (0..50)
        .map(|i| album_json(&format!("album-{i}"), &format!("Single {i}"), "2024-01-01"))
        .collect();
    Mock::given(method("GET"))
        .and(path("/artists/artist-1/albums"))
        .and(query_param("offset", "0"))
        .and(query_param("include_groups", "single"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": first_page,
            "total": 52,
            "limit": 50,
            "offset": 0,
            "next": null
        })))
        .mount(&server)
        .await;

    // Second page: 2 albums, short page ends the loop.
    Mock::given(method("GET"))
        .and(path("/artists/artist-1/albums"))
        .and(query_param("offset", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                album_json("album-50", "Single 50", "2023-06-01"),
                album_json("album-51", "Single 51", "2023-01-01"),
            ],
            "total": 52,
            "limit": 50,
            "offset": 50,
            "next": null
        })))
        .mount(&server)
        .await;

    let client = SpotifyClient::with_base_url("test-token", server.uri());
    let albums = client.artist_albums("artist-1").await.unwrap();

    assert_eq!(albums.len(), 52);
    assert_eq!(albums[0].id, "album-0");
    assert_eq!(albums[51].id, "album-51");
}

#[tokio::test]
async fn test_album_tracks_single_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/albums/album-1/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": "t1", "name": "Summer Remix", "track_number": 1},
                {"id": "t2", "name": "Summer Remix Live", "track_number": 2}
            ],
            "total": 2,
            "limit": 50,
            "offset": 0,
            "next": null
        })))
        .mount(&server)
        .await;

    let client = SpotifyClient::with_base_url("test-token", server.uri());
    let tracks = client.album_tracks("album-1").await.unwrap();

    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].name, "Summer Remix");
}

#[tokio::test]
async fn test_unknown_artist_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artists/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"status": 404, "message": "Non existing id"}
        })))
        .mount(&server)
        .await;

    let client = SpotifyClient::with_base_url("test-token", server.uri());
    let result = client.artist("nope").await;

    match result {
        Err(Error::Api(ApiError::NotFound { .. })) => {}
        other => panic!("expected NotFound, got {:?}", other.map(|a| a.name)),
    }
}

#[tokio::test]
async fn test_rate_limited_request_is_retried() {
    let server = MockServer::start().await;

    // First attempt is throttled; retry-after of 0 keeps the test fast.
    Mock::given(method("GET"))
        .and(path("/artists/artist-1"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "0")
                .set_body_json(json!({"error": {"status": 429, "message": "rate limited"}})),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/artists/artist-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "artist-1",
            "name": "Retried Artist"
        })))
        .mount(&server)
        .await;

    let client = SpotifyClient::with_base_url("test-token", server.uri());
    let artist = client.artist("artist-1").await.unwrap();

    assert_eq!(artist.name, "Retried Artist");
}
