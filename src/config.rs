//! Configuration management for the lineup matcher.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials,
//! server settings, and endpoint URLs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. For the client secret only: a `credentials.json` file next to it

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `lineupcli/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/lineupcli/.env`
/// - macOS: `~/Library/Application Support/lineupcli/.env`
/// - Windows: `%LOCALAPPDATA%/lineupcli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an
/// error string if directory creation or file loading fails.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lineupcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the address the report server binds to.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Spotify API client ID used for the token exchange.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret used for the token exchange.
///
/// Reads the `SPOTIFY_API_AUTH_CLIENT_SECRET` environment variable first.
/// When unset, falls back to a `credentials.json` file in the local data
/// directory containing `{"spotify_secret": "..."}`, so the secret can be
/// kept out of the environment entirely.
///
/// # Errors
///
/// Returns an error string when neither source provides a secret, or when
/// the credentials file exists but cannot be read or parsed.
pub async fn spotify_client_secret() -> Result<String, String> {
    if let Ok(secret) = env::var("SPOTIFY_API_AUTH_CLIENT_SECRET") {
        return Ok(secret);
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lineupcli/credentials.json");

    let content = async_fs::read_to_string(&path).await.map_err(|_| {
        format!(
            "SPOTIFY_API_AUTH_CLIENT_SECRET is not set and {} is missing",
            path.display()
        )
    })?;
    let json: serde_json::Value = serde_json::from_str(&content).map_err(|e| e.to_string())?;

    json["spotify_secret"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| format!("{} is missing the spotify_secret field", path.display()))
}

/// Returns the Spotify Web API base URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the Spotify token exchange URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}
