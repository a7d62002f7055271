//! End-to-end tests against the real Spotify Web API.
//!
//! Gated behind the `e2e` feature and skipped unless
//! `SPOTIFY_TEST_CLIENT_ID` / `SPOTIFY_TEST_CLIENT_SECRET` are set.
//! These hit public, stable catalog data only.

#![cfg(feature = "e2e")]

use std::env;

use spotify_api_rs::auth::{request_access_token, Credentials};
use spotify_api_rs::client::SpotifyClient;

/// Band of Horses, used by Spotify's own API documentation examples.
const TEST_ARTIST_ID: &str = "0OdUWJ0sBjDrqHygGUXeCF";

fn test_credentials() -> Option<Credentials> {
    let client_id = env::var("SPOTIFY_TEST_CLIENT_ID").ok()?;
    let client_secret = env::var("SPOTIFY_TEST_CLIENT_SECRET").ok()?;
    Some(Credentials::new(client_id, client_secret))
}

#[tokio::test]
async fn test_client_credentials_grant_and_artist_lookup() {
    let Some(credentials) = test_credentials() else {
        eprintln!("skipping: SPOTIFY_TEST_CLIENT_ID / SPOTIFY_TEST_CLIENT_SECRET not set");
        return;
    };

    let http = reqwest::Client::new();
    let token = request_access_token(&http, &credentials)
        .await
        .expect("token request failed");
    assert_eq!(token.token_type, "Bearer");

    let client = SpotifyClient::new(token.access_token);
    let artist = client.artist(TEST_ARTIST_ID).await.expect("artist lookup failed");
    assert!(!artist.name.is_empty());

    let albums = client
        .artist_albums(TEST_ARTIST_ID)
        .await
        .expect("album listing failed");
    assert!(!albums.is_empty(), "expected at least one single release");

    let tracks = client
        .album_tracks(&albums[0].id)
        .await
        .expect("track listing failed");
    assert!(!tracks.is_empty());
}
