//! Configuration management for exitspotify.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Real environment variables take
//! precedence over the file because `dotenv` never overrides variables that
//! are already set.
//!
//! Only the client credentials are mandatory, and only for commands that
//! talk to the catalog. Endpoints and the server address have defaults.

use std::{env, path::PathBuf};

use crate::error::Error;

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8501";

/// Loads environment variables from `<data_local_dir>/exitspotify/.env`.
///
/// The parent directory is created if needed. A missing `.env` file is fine;
/// a file that exists but cannot be parsed is reported as an error.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/exitspotify/.env`
/// - macOS: `~/Library/Application Support/exitspotify/.env`
/// - Windows: `%LOCALAPPDATA%/exitspotify/.env`
///
/// # Example
///
/// ```
/// use exitspotify::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Location of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("exitspotify/.env");
    path
}

/// Address the local HTTP service binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Spotify application client id (`SPOTIFY_API_AUTH_CLIENT_ID`).
///
/// # Errors
///
/// [`Error::MissingConfig`] if the variable is unset or blank.
pub fn spotify_client_id() -> Result<String, Error> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Spotify application client secret (`SPOTIFY_API_AUTH_CLIENT_SECRET`).
///
/// The secret is never logged.
pub fn spotify_client_secret() -> Result<String, Error> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Base URL of the Web API (`SPOTIFY_API_URL`), without trailing slash.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Token endpoint used for the client credentials exchange (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

fn required(key: &'static str) -> Result<String, Error> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::MissingConfig(key)),
    }
}
