//! Spotify Web API client library
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use spotify_api_rs::prelude::*;
//! ```
//!
//! This re-exports the most commonly used types including
//! [`SpotifyClient`](client::SpotifyClient), the auth helpers, error
//! types, and data models.

pub mod auth;
pub mod catalog;
pub mod client;
pub mod error;
pub mod models;
pub mod playlist;
pub mod prelude;

mod retry;
