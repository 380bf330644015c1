//! # Playlist Module
//!
//! The catalog independent core: turn a canonical playlist id into a flat
//! track listing, derive statistics from it and serialize it to CSV.
//!
//! ```text
//! normalize_playlist_ref (utils)
//!          ↓
//! extract  ←  PageFetcher (spotify::SpotifyClient, test doubles)
//!          ↓
//! PlaylistResult
//!     ├── stats   (totals, top artists)
//!     ├── filter  (substring search)
//!     └── export  (CSV bytes, file name)
//! ```
//!
//! Nothing in here talks to the network directly. All remote access goes
//! through the [`PageFetcher`] trait so shells can inject the HTTP client and
//! tests can inject canned pages.

mod export;
mod extract;
mod filter;
mod stats;

pub use export::{CSV_HEADER, safe_file_name, to_csv};
pub use extract::{PageFetcher, extract, fetch_playlist};
pub use filter::{FilterColumn, filter_tracks};
pub use stats::{top_artists, totals};

/// Separator used to join performer names into a single `Artist` field.
pub const ARTIST_SEPARATOR: &str = ", ";

/// Placeholder written when a track carries no ISRC.
pub const MISSING_ISRC: &str = "N/A";
