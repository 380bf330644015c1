use tabled::Table;

use crate::{
    info,
    playlist::{self, FilterColumn},
    success,
    types::TrackTableRow,
    utils,
};

pub async fn tracks(reference: String, filter: Option<String>, column: FilterColumn) {
    let Some(result) = super::load_playlist(&reference).await else {
        return;
    };

    let totals = playlist::totals(&result);
    success!(
        "{} by {}",
        result.name,
        result.owner_name.as_deref().unwrap_or("Unknown")
    );
    info!(
        "{} tracks, total {}, average {}",
        totals.count,
        utils::format_long_duration(totals.total_ms),
        utils::format_long_duration(totals.avg_ms)
    );
    if let Some(url) = &result.external_url {
        info!("{}", url);
    }

    let query = filter.unwrap_or_default();
    let rows: Vec<TrackTableRow> = playlist::filter_tracks(&result, &query, column)
        .into_iter()
        .map(|t| TrackTableRow {
            artist: t.artist.clone(),
            title: t.title.clone(),
            album: t.album.clone(),
            duration: utils::format_duration(t.duration_ms),
            isrc: t.external_id.clone(),
        })
        .collect();

    if rows.is_empty() {
        info!("No tracks match.");
        return;
    }

    if !query.is_empty() {
        info!("{} of {} tracks match {:?}", rows.len(), totals.count, query);
    }

    let table = Table::new(rows);
    println!("{}", table);
}
