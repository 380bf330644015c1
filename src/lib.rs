//! Playlist export library.
//!
//! Fetches the track listing of a public Spotify playlist, derives a few
//! statistics from it and serializes it to CSV. The core pipeline lives in
//! [`playlist`] and only depends on the [`playlist::PageFetcher`] trait; the
//! HTTP implementation of that trait is in [`spotify`].
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local service
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Typed errors of the pipeline and the catalog client
//! - `management` - In-memory token and history bookkeeping
//! - `playlist` - Extraction pipeline, statistics, filtering and CSV export
//! - `server` - Local HTTP server wiring
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Reference normalization and duration formatting
//!
//! # Example
//!
//! ```
//! use exitspotify::{playlist, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> exitspotify::Res<()> {
//!     let client = SpotifyClient::from_env()?;
//!     let result = playlist::fetch_playlist("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M", &client).await?;
//!     std::io::Write::write_all(&mut std::io::stdout(), &playlist::to_csv(&result)?)?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod playlist;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the command and server layers where errors from several sources
/// (library, IO, address parsing) meet and are only ever displayed. The
/// library itself returns [`error::Result`].
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use exitspotify::Res;
///
/// async fn read_name() -> Res<String> {
///     Ok("Weekly Mix".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line prefixed with a blue `o`.
///
/// Takes the same arguments as `println!`.
///
/// ```
/// info!("{} tracks, total {}", count, total);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success line prefixed with a green check mark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error line prefixed with a red `!` and exits with status 1.
///
/// Only for failures a command cannot continue from. Nothing after the
/// macro runs, so it can stand in for a value in a `match` arm:
///
/// ```
/// let client = match SpotifyClient::from_env() {
///     Ok(client) => client,
///     Err(e) => error!("{}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning line prefixed with a yellow `!`.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
