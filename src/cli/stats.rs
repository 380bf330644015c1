use tabled::Table;

use crate::{info, playlist, success, types::ArtistTableRow, utils};

pub async fn stats(reference: String, limit: usize) {
    let Some(result) = super::load_playlist(&reference).await else {
        return;
    };

    let totals = playlist::totals(&result);
    success!("{}", result.name);
    info!("Tracks:         {}", totals.count);
    info!("Total duration: {}", utils::format_long_duration(totals.total_ms));
    info!("Avg duration:   {}", utils::format_long_duration(totals.avg_ms));

    let top = playlist::top_artists(&result, limit);
    if top.is_empty() {
        info!("No statistics available.");
        return;
    }

    let rows: Vec<ArtistTableRow> = top
        .into_iter()
        .enumerate()
        .map(|(i, a)| ArtistTableRow {
            rank: i + 1,
            artist: a.artist,
            count: a.count,
        })
        .collect();

    println!("{}", Table::new(rows));
}
