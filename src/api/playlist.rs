use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::Query,
    http::header,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::{
    api::ApiError,
    management::HistoryManager,
    playlist::{self, FilterColumn, PageFetcher},
    types::{ArtistFrequency, PlaylistResult, TrackRecord},
    utils,
};

/// Default length of the top-artist ranking.
pub const DEFAULT_TOP_ARTISTS: usize = 15;

const UNKNOWN_OWNER: &str = "Unknown";

#[derive(Debug, Deserialize)]
pub struct PlaylistQuery {
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub column: FilterColumn,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CsvQuery {
    #[serde(rename = "ref")]
    pub reference: String,
}

#[derive(Debug, Serialize)]
pub struct TotalsView {
    pub count: usize,
    pub total_ms: u64,
    pub avg_ms: u64,
    pub total: String,
    pub average: String,
}

#[derive(Debug, Serialize)]
pub struct TrackView {
    pub artist: String,
    pub title: String,
    pub album: String,
    pub duration: String,
    pub duration_ms: u64,
    pub isrc: String,
}

impl From<&TrackRecord> for TrackView {
    fn from(t: &TrackRecord) -> Self {
        Self {
            artist: t.artist.clone(),
            title: t.title.clone(),
            album: t.album.clone(),
            duration: utils::format_duration(t.duration_ms),
            duration_ms: t.duration_ms,
            isrc: t.external_id.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlaylistReport {
    pub name: String,
    pub owner: String,
    pub cover_url: Option<String>,
    pub external_url: Option<String>,
    pub totals: TotalsView,
    pub tracks: Vec<TrackView>,
    pub top_artists: Vec<ArtistFrequency>,
}

impl PlaylistReport {
    /// Totals and ranking cover the whole playlist, `tracks` only the filtered view.
    pub fn build(result: &PlaylistResult, query: &str, column: FilterColumn, limit: usize) -> Self {
        let totals = playlist::totals(result);

        Self {
            name: result.name.clone(),
            owner: result
                .owner_name
                .clone()
                .unwrap_or_else(|| UNKNOWN_OWNER.to_string()),
            cover_url: result.cover_url.clone(),
            external_url: result.external_url.clone(),
            totals: TotalsView {
                count: totals.count,
                total_ms: totals.total_ms,
                avg_ms: totals.avg_ms,
                total: utils::format_long_duration(totals.total_ms),
                average: utils::format_long_duration(totals.avg_ms),
            },
            tracks: playlist::filter_tracks(result, query, column)
                .into_iter()
                .map(TrackView::from)
                .collect(),
            top_artists: playlist::top_artists(result, limit),
        }
    }
}

pub async fn playlist<F>(
    Query(query): Query<PlaylistQuery>,
    Extension(fetcher): Extension<Arc<F>>,
    Extension(history): Extension<Arc<Mutex<HistoryManager>>>,
) -> Result<Json<PlaylistReport>, ApiError>
where
    F: PageFetcher + Send + Sync + 'static,
{
    let result = playlist::fetch_playlist(&query.reference, fetcher.as_ref()).await?;
    history.lock().await.record(&result.name);

    Ok(Json(PlaylistReport::build(
        &result,
        query.q.as_deref().unwrap_or_default(),
        query.column,
        query.limit.unwrap_or(DEFAULT_TOP_ARTISTS),
    )))
}

pub async fn playlist_csv<F>(
    Query(query): Query<CsvQuery>,
    Extension(fetcher): Extension<Arc<F>>,
) -> Result<impl IntoResponse, ApiError>
where
    F: PageFetcher + Send + Sync + 'static,
{
    let result = playlist::fetch_playlist(&query.reference, fetcher.as_ref()).await?;
    let body = playlist::to_csv(&result)?;

    // header values must stay ASCII
    let file_name: String = format!("{}.csv", playlist::safe_file_name(&result.name))
        .chars()
        .map(|c| if c.is_ascii() { c } else { '_' })
        .collect();

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        body,
    ))
}
