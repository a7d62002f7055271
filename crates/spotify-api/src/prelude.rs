//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the
//! spotify-api crate, making it easy for library consumers to import
//! everything they need with a single use statement.
//!
//! # Example
//!
//! ```
//! use spotify_api_rs::prelude::*;
//!
//! // Now you have access to:
//! // - SpotifyClient (API client)
//! // - Credentials, AccessToken, request_access_token (auth)
//! // - Error, ApiError, Result (error handling)
//! // - Artist, SimplifiedAlbum, SimplifiedTrack, Playlist, Page (models)
//! ```

// Client
pub use crate::client::SpotifyClient;

// Auth
pub use crate::auth::{request_access_token, AccessToken, Credentials};

// Error types
pub use crate::error::{ApiError, Error, Result};

// Data models
pub use crate::models::{
    AddTracksRequest, Artist, Page, Playlist, PlaylistItem, PlaylistTrackRef, SimplifiedAlbum,
    SimplifiedTrack, SnapshotId,
};
