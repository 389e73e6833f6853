//! # CLI Module
//!
//! This module provides the command-line interface layer for spopcli. It
//! implements the user-facing commands and coordinates between the Spotify
//! integration layer, the summary client, and the pure ranking helpers.
//!
//! ## Commands
//!
//! - [`auth`] - Verifies that the configured client credentials are accepted
//!   by the Spotify token endpoint
//! - [`chart`] - Runs the full pipeline: authenticate, scan the playlist,
//!   enrich and rank artists, render the ranked table, then answer
//!   interactive selections with per-artist detail
//! - [`artist`] - Renders the detail view for one named artist of a playlist
//!   without going through the interactive prompt
//!
//! ## Pipeline Gating
//!
//! The chart command is a linear optional-chain: credentials → token →
//! artist stubs → enriched ranking → table → selection. Each stage runs only
//! if the previous one produced a non-empty result. Empty stages end the run
//! with a quiet status line; only an authentication failure is reported as
//! an error, because without a token nothing else can be attempted.
//!
//! ## Error Presentation
//!
//! - Authentication failures are fatal and explicit.
//! - Artist profiles that could not be fetched are summarized in a single
//!   warning; the ranking proceeds with the profiles that did load.
//! - Top-track and summary failures warn and leave their section empty.
//!
//! ## Rendering
//!
//! The ranked table is built with `tabled`; detail blocks are plain lines so
//! links and image URLs stay clickable in the terminal. Long-running network
//! phases show indicatif spinners or progress bars.

mod artist;
mod auth;
mod chart;

pub use artist::artist;
pub use auth::auth;
pub use chart::chart;
