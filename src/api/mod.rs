//! # API Module
//!
//! HTTP endpoints of the local exitspotify service. The handlers are thin:
//! they parse the query string, run the playlist pipeline through whatever
//! [`PageFetcher`](crate::playlist::PageFetcher) the router was built with
//! and shape the result as JSON or CSV.
//!
//! ## Endpoints
//!
//! - [`health`] - `GET /health`, status and version
//! - [`playlist`] - `GET /api/playlist?ref=...`, JSON report of a playlist
//! - [`playlist_csv`] - `GET /api/playlist/csv?ref=...`, CSV download
//! - [`history`] - `GET /api/history`, recently fetched playlist names
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use exitspotify::{server, spotify::SpotifyClient};
//!
//! let app = server::router(Arc::new(SpotifyClient::from_env()?), Default::default());
//! ```

mod health;
mod history;
mod playlist;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::{Error, FetchError};

pub use health::health;
pub use history::history;
pub use playlist::{
    CsvQuery, PlaylistQuery, PlaylistReport, TotalsView, TrackView, playlist, playlist_csv,
};

/// Wraps a library [`Error`] so handlers can return it with `?`.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            Error::MalformedReference(_) => StatusCode::BAD_REQUEST,
            Error::Fetch(FetchError::NotFound(_)) => StatusCode::NOT_FOUND,
            Error::Fetch(FetchError::Forbidden(_)) => StatusCode::FORBIDDEN,
            Error::Fetch(FetchError::RateLimited { .. }) => StatusCode::TOO_MANY_REQUESTS,
            Error::Fetch(_) => StatusCode::BAD_GATEWAY,
            Error::MissingConfig(_) | Error::Csv(_) | Error::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("request failed: {}", self.0);
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
