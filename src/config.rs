//! Configuration management for the playlist popularity CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials, API
//! endpoints, and the optional OpenAI settings used for artist summaries.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (endpoints and model only)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spopcli/.env`. When no file exists there, a
/// `.env` in the current working directory is tried instead. Variables that
/// are already set in the environment always win.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spopcli/.env`
/// - macOS: `~/Library/Application Support/spopcli/.env`
/// - Windows: `%LOCALAPPDATA%/spopcli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment is set up, or an error string if the
/// data directory cannot be created.
///
/// # Example
///
/// ```
/// use spopcli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spopcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if dotenv::from_path(&path).is_err() {
        // no data-dir .env; a working-directory .env is fine too
        let _ = dotenv::dotenv();
    }
    Ok(())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable which
/// contains the client ID obtained when registering the application with
/// Spotify's developer platform.
///
/// # Errors
///
/// Returns an error string if the variable is unset or empty. Callers
/// surface this to the user; without credentials no request is attempted.
pub fn spotify_client_id() -> Result<String, String> {
    require("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable which
/// contains the client secret obtained when registering the application with
/// Spotify's developer platform.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
///
/// # Errors
///
/// Returns an error string if the variable is unset or empty.
pub fn spotify_client_secret() -> Result<String, String> {
    require("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Returns the Spotify Web API base URL.
///
/// Reads the `SPOTIFY_API_URL` environment variable, defaulting to the
/// public production endpoint. The override exists mainly for testing
/// against a local stub server.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify token exchange URL.
///
/// Reads the `SPOTIFY_API_TOKEN_URL` environment variable, defaulting to
/// the public accounts endpoint used for the client-credentials grant.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the OpenAI API key, if one is configured.
///
/// Reads the `OPENAI_API_KEY` environment variable. The key is optional:
/// when it is absent the artist detail view simply skips the generated
/// summary block.
pub fn openai_api_key() -> Option<String> {
    env::var("OPENAI_API_KEY").ok().filter(|v| !v.is_empty())
}

/// Returns the OpenAI-compatible API base URL.
///
/// Reads the `OPENAI_API_URL` environment variable, defaulting to the
/// public endpoint. Any service exposing the legacy `/completions` shape
/// can be substituted here.
pub fn openai_apiurl() -> String {
    env::var("OPENAI_API_URL").unwrap_or_else(|_| "https://api.openai.com/v1".to_string())
}

/// Returns the completion model used for artist summaries.
///
/// Reads the `OPENAI_MODEL` environment variable, defaulting to
/// `gpt-3.5-turbo-instruct`, the current instruct-style completion model.
pub fn openai_model() -> String {
    env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo-instruct".to_string())
}

fn require(name: &str) -> Result<String, String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(format!("{} must be set", name)),
    }
}
