use csv::Writer;

use crate::{
    error::{Error, Result},
    types::PlaylistResult,
    utils,
};

/// Column order of every exported file.
pub const CSV_HEADER: [&str; 5] = ["Artist", "Title", "Album", "Duration", "ISRC"];

const FALLBACK_FILE_NAME: &str = "playlist";

/// Serializes the tracks of a playlist as UTF-8 CSV, header row first.
///
/// Durations are written as `m:ss`. Quoting of commas, quotes and line
/// breaks is left to the `csv` writer.
pub fn to_csv(result: &PlaylistResult) -> Result<Vec<u8>> {
    let mut wtr = Writer::from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)?;

    for track in &result.tracks {
        wtr.write_record([
            track.artist.as_str(),
            track.title.as_str(),
            track.album.as_str(),
            utils::format_duration(track.duration_ms).as_str(),
            track.external_id.as_str(),
        ])?;
    }

    wtr.into_inner().map_err(|e| Error::Io(e.into_error()))
}

/// Derives a file system friendly base name from a playlist name.
///
/// Characters other than alphanumerics, whitespace, `.`, `-` and `_` become
/// `_`, whitespace runs collapse into a single `_` and the result is
/// lowercased. Falls back to `"playlist"` when nothing is left.
pub fn safe_file_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let joined = replaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();

    if joined.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        joined
    }
}
