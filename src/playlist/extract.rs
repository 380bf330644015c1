use std::future::Future;

use crate::{
    error::{Error, FetchError, Result},
    playlist::{ARTIST_SEPARATOR, MISSING_ISRC},
    types::{Page, PlaylistMetadata, PlaylistResult, TrackObject, TrackRecord},
    utils,
};

/// Source of playlist metadata and item pages.
///
/// Implementations own transport, authentication and timeouts. The pipeline
/// calls them strictly in sequence: metadata, first page, then one
/// `fetch_next_page` per continuation until a page comes back without one.
pub trait PageFetcher {
    fn fetch_metadata(
        &self,
        playlist_id: &str,
    ) -> impl Future<Output = std::result::Result<PlaylistMetadata, FetchError>> + Send;

    fn fetch_first_page(
        &self,
        playlist_id: &str,
    ) -> impl Future<Output = std::result::Result<Page, FetchError>> + Send;

    fn fetch_next_page(
        &self,
        next: &str,
    ) -> impl Future<Output = std::result::Result<Page, FetchError>> + Send;
}

/// Fetches every page of a playlist and flattens the items into records.
///
/// Items whose track is `null` (removed or unavailable in the market) are
/// skipped. Source order is kept as is.
///
/// # Errors
///
/// - [`Error::MalformedReference`] if `playlist_id` is empty or contains
///   anything but ASCII alphanumerics; nothing is fetched in that case.
/// - [`Error::Fetch`] if the metadata or any page request fails. Records
///   collected from earlier pages are dropped.
///
/// # Example
///
/// ```
/// let client = SpotifyClient::from_env()?;
/// let result = extract("37i9dQZF1DXcBWIGoYBM5M", &client).await?;
/// println!("{} has {} tracks", result.name, result.tracks.len());
/// ```
pub async fn extract<F: PageFetcher>(playlist_id: &str, fetcher: &F) -> Result<PlaylistResult> {
    if playlist_id.is_empty() || !playlist_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::MalformedReference(playlist_id.to_string()));
    }

    let metadata = fetcher.fetch_metadata(playlist_id).await?;

    let mut tracks: Vec<TrackRecord> = Vec::new();
    let mut page = fetcher.fetch_first_page(playlist_id).await?;
    let mut page_number = 1;

    loop {
        log::debug!(
            "playlist {}: page {} with {} items",
            playlist_id,
            page_number,
            page.items.len()
        );

        tracks.extend(
            page.items
                .into_iter()
                .filter_map(|item| item.track)
                .map(to_record),
        );

        match page.next {
            Some(next) => {
                page = fetcher.fetch_next_page(&next).await?;
                page_number += 1;
            }
            None => break,
        }
    }

    let PlaylistMetadata {
        name,
        cover_url,
        owner_name,
        external_url,
    } = metadata;

    Ok(PlaylistResult {
        name,
        cover_url,
        owner_name,
        external_url,
        tracks,
    })
}

/// Normalizes a raw reference (id, URI or URL) and runs [`extract`] on it.
pub async fn fetch_playlist<F: PageFetcher>(reference: &str, fetcher: &F) -> Result<PlaylistResult> {
    let playlist_id = utils::normalize_playlist_ref(reference);
    extract(&playlist_id, fetcher).await
}

fn to_record(track: TrackObject) -> TrackRecord {
    let artist = track
        .artists
        .into_iter()
        .map(|a| a.name)
        .collect::<Vec<_>>()
        .join(ARTIST_SEPARATOR);

    if track.duration_ms == 0 {
        log::warn!("track {:?} by {:?} reports a zero duration", track.name, artist);
    }

    TrackRecord {
        artist,
        title: track.name,
        album: track.album.map(|a| a.name).unwrap_or_default(),
        duration_ms: track.duration_ms,
        external_id: track
            .external_ids
            .and_then(|ids| ids.isrc)
            .unwrap_or_else(|| MISSING_ISRC.to_string()),
    }
}
