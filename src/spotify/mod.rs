//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by spopcli.
//! It handles the client-credentials authentication grant, playlist scanning,
//! artist profile retrieval and top-track queries, keeping all HTTP
//! communication in one layer so the CLI above it only deals with data.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (chart, artist)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials grant)
//!     ├── Playlist Scanning (paginated track listing)
//!     ├── Artist Profiles (popularity, followers, images)
//!     └── Top Tracks (per market)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Exchanges a client id/secret pair for a bearer token. The
//!   token is requested fresh on every run; no refresh or expiry tracking
//!   is needed for a short-lived CLI invocation.
//! - [`playlist`] - Walks a playlist's track listing page by page, collecting
//!   each distinct artist exactly once in first-appearance order. Pagination
//!   follows the API's `next` links up to a configurable page ceiling.
//! - [`artists`] - Fetches full artist profiles one by one. Profiles that
//!   cannot be fetched are reported back by id rather than dropped silently,
//!   so the caller can tell the user the ranking is partial.
//! - [`tracks`] - Fetches an artist's top tracks for a market.
//!
//! ## Error Handling
//!
//! There is deliberately no retry or backoff anywhere in this layer. The
//! token exchange surfaces a typed [`crate::errors::AuthError`]; per-item
//! failures during playlist scanning and enrichment degrade the result
//! instead of aborting the run. Sorting and truncation of the fetched data
//! live in [`crate::utils`] so they stay testable without a network.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token exchange
//! - `GET /playlists/{id}/tracks` - paginated playlist track listing
//! - `GET /artists/{id}` - artist profile
//! - `GET /artists/{id}/top-tracks` - top tracks per market

pub mod artists;
pub mod auth;
pub mod playlist;
pub mod tracks;
