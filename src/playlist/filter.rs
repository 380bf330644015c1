use clap::ValueEnum;
use serde::Deserialize;

use crate::types::{PlaylistResult, TrackRecord};

/// Field a track filter is applied to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FilterColumn {
    #[default]
    All,
    Artist,
    Title,
    Album,
}

/// Returns the records whose selected column contains `query`, ignoring case.
///
/// An empty query keeps every record. Whitespace is matched literally.
/// Order is preserved.
pub fn filter_tracks<'a>(
    result: &'a PlaylistResult,
    query: &str,
    column: FilterColumn,
) -> Vec<&'a TrackRecord> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return result.tracks.iter().collect();
    }

    let contains = |field: &str| field.to_lowercase().contains(&needle);

    result
        .tracks
        .iter()
        .filter(|t| match column {
            FilterColumn::All => contains(&t.artist) || contains(&t.title) || contains(&t.album),
            FilterColumn::Artist => contains(&t.artist),
            FilterColumn::Title => contains(&t.title),
            FilterColumn::Album => contains(&t.album),
        })
        .collect()
}
