//! # CLI Module
//!
//! User-facing commands of exitspotify. Each command takes the raw playlist
//! reference typed by the user (link, URI or bare id), runs the pipeline
//! against the Spotify client and prints the outcome.
//!
//! ## Commands
//!
//! - [`tracks`] - summary plus a filterable track table
//! - [`stats`] - totals and the most frequent artists
//! - [`export`] - writes the playlist as CSV
//! - [`serve`] - runs the local HTTP service
//!
//! ## Usage Patterns
//!
//! ```bash
//! exitspotify tracks https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M
//! exitspotify tracks spotify:playlist:37i9dQZF1DXcBWIGoYBM5M --filter ambient --column album
//! exitspotify stats 37i9dQZF1DXcBWIGoYBM5M --limit 10
//! exitspotify export 37i9dQZF1DXcBWIGoYBM5M --output mix.csv
//! exitspotify serve
//! ```
//!
//! ## Error Handling
//!
//! Commands do not return errors. Blank references are rejected with a
//! warning before anything is fetched; configuration and fetch failures end
//! the process through the [`error!`](crate::error!) macro with a single
//! message.

mod export;
mod serve;
mod stats;
mod tracks;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, playlist, spotify::SpotifyClient, types::PlaylistResult, warning};

pub use export::export;
pub use serve::serve;
pub use stats::stats;
pub use tracks::tracks;

/// Fetches a playlist for a command, with a spinner while pages load.
///
/// Returns `None` if the reference is blank. Any other failure terminates
/// the program.
async fn load_playlist(reference: &str) -> Option<PlaylistResult> {
    if reference.trim().is_empty() {
        warning!("Please provide a playlist link, URI or ID.");
        return None;
    }

    let client = match SpotifyClient::from_env() {
        Ok(client) => client,
        Err(e) => error!("{}. Add it to {}", e, crate::config::env_path().display()),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlist...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = playlist::fetch_playlist(reference, &client).await;
    pb.finish_and_clear();

    match result {
        Ok(result) => Some(result),
        Err(e) => error!("{}", e),
    }
}
