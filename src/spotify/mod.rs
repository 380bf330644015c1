//! # Spotify Integration Module
//!
//! HTTP implementation of [`PageFetcher`](crate::playlist::PageFetcher) backed by
//! the Spotify Web API.
//!
//! ## Overview
//!
//! ```text
//! playlist::extract
//!          ↓
//! SpotifyClient (PageFetcher)
//!     ├── Authentication (client credentials, in-memory token)
//!     └── Playlist reads (metadata, item pages)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client credentials exchange
//! - `GET /playlists/{id}` - name, cover, owner and link of a playlist
//! - `GET /playlists/{id}/tracks` - item pages, followed through `next`
//!
//! ## Error Handling
//!
//! Non-success responses are mapped onto [`FetchError`]:
//!
//! - `401` - [`FetchError::Unauthorized`], the cached token is dropped
//! - `403` - [`FetchError::Forbidden`], typically a private playlist
//! - `404` - [`FetchError::NotFound`]
//! - `429` - [`FetchError::RateLimited`] with the `Retry-After` value
//! - `502` - retried after a short pause, up to [`MAX_ATTEMPTS`] requests
//!
//! Everything else becomes [`FetchError::Status`] carrying the API message.

pub mod auth;
mod playlists;

use std::time::Duration;

use reqwest::{Client, Response, StatusCode, header::RETRY_AFTER};
use serde::de::DeserializeOwned;
use tokio::{sync::Mutex, time::sleep};

use crate::{
    config,
    error::{Error, FetchError},
    management::TokenManager,
};

/// Upper bound of requests sent for one URL when the API answers 502.
pub const MAX_ATTEMPTS: u32 = 3;

const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Spotify Web API client used as the playlist page source.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    tokens: Mutex<TokenManager>,
}

impl SpotifyClient {
    pub fn new(api_url: String, token_url: String, client_id: String, client_secret: String) -> Self {
        Self::with_http_client(Client::new(), api_url, token_url, client_id, client_secret)
    }

    /// Same as [`SpotifyClient::new`] with a caller configured HTTP client,
    /// e.g. one with timeouts or proxy settings.
    pub fn with_http_client(
        http: Client,
        api_url: String,
        token_url: String,
        client_id: String,
        client_secret: String,
    ) -> Self {
        Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            tokens: Mutex::new(TokenManager::new(token_url, client_id, client_secret)),
        }
    }

    /// Builds a client from the environment, see [`crate::config`].
    ///
    /// # Errors
    ///
    /// [`Error::MissingConfig`] if the client id or secret is not set.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(
            config::spotify_apiurl(),
            config::spotify_apitoken_url(),
            config::spotify_client_id()?,
            config::spotify_client_secret()?,
        ))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, subject: &str) -> Result<T, FetchError> {
        let mut attempt = 1;

        loop {
            let token = self.tokens.lock().await.get_valid_token(&self.http).await?;
            let response = self.http.get(url).bearer_auth(token).send().await?;
            let status = response.status();

            if status == StatusCode::BAD_GATEWAY && attempt < MAX_ATTEMPTS {
                log::debug!("bad gateway on {}, attempt {} of {}", url, attempt, MAX_ATTEMPTS);
                attempt += 1;
                sleep(RETRY_DELAY).await;
                continue; // retry
            }

            if !status.is_success() {
                if status == StatusCode::UNAUTHORIZED {
                    self.tokens.lock().await.invalidate();
                }
                return Err(status_error(response, subject).await);
            }

            return response
                .json::<T>()
                .await
                .map_err(|e| FetchError::Decode(e.to_string()));
        }
    }
}

async fn status_error(response: Response, subject: &str) -> FetchError {
    let status = response.status();
    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());

    let body = response.text().await.unwrap_or_default();
    let message = api_error_message(&body).unwrap_or(body);

    match status {
        StatusCode::NOT_FOUND => FetchError::NotFound(subject.to_string()),
        StatusCode::UNAUTHORIZED => FetchError::Unauthorized(message),
        StatusCode::FORBIDDEN => FetchError::Forbidden(subject.to_string()),
        StatusCode::TOO_MANY_REQUESTS => FetchError::RateLimited { retry_after },
        _ => FetchError::Status { status, message },
    }
}

// {"error": {"status": 404, "message": "Resource not found"}}
fn api_error_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json["error"]["message"].as_str().map(str::to_string)
}
