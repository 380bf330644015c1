use std::collections::HashMap;

use crate::{
    playlist::ARTIST_SEPARATOR,
    types::{ArtistFrequency, PlaylistResult, Totals},
};

/// Track count, summed duration and truncated average duration.
///
/// An empty playlist yields all zeros.
pub fn totals(result: &PlaylistResult) -> Totals {
    let count = result.tracks.len();
    let total_ms: u64 = result.tracks.iter().map(|t| t.duration_ms).sum();
    let avg_ms = if count == 0 {
        0
    } else {
        total_ms / count as u64
    };

    Totals {
        count,
        total_ms,
        avg_ms,
    }
}

/// Ranks individual performers by the number of tracks they appear on.
///
/// The joined `artist` field of every record is split back into single
/// names. Ties keep the order in which the performers were first seen.
/// At most `limit` entries are returned.
pub fn top_artists(result: &PlaylistResult, limit: usize) -> Vec<ArtistFrequency> {
    let mut ranking: Vec<ArtistFrequency> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for record in &result.tracks {
        for name in record
            .artist
            .split(ARTIST_SEPARATOR)
            .filter(|name| !name.is_empty())
        {
            match positions.get(name) {
                Some(&pos) => ranking[pos].count += 1,
                None => {
                    positions.insert(name, ranking.len());
                    ranking.push(ArtistFrequency {
                        artist: name.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    // stable, so first-seen order survives among equal counts
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking.truncate(limit);
    ranking
}
