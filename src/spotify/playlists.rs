use crate::{
    error::FetchError,
    playlist::PageFetcher,
    spotify::SpotifyClient,
    types::{Page, PlaylistInfoResponse, PlaylistItemsResponse, PlaylistMetadata},
};

const METADATA_FIELDS: &str = "name,images,owner(display_name),external_urls(spotify)";

/// Items per page, the maximum the endpoint accepts.
const PAGE_LIMIT: u32 = 100;

impl PageFetcher for SpotifyClient {
    async fn fetch_metadata(&self, playlist_id: &str) -> Result<PlaylistMetadata, FetchError> {
        let api_url = format!(
            "{uri}/playlists/{id}?fields={fields}",
            uri = self.api_url(),
            id = playlist_id,
            fields = METADATA_FIELDS
        );

        let info = self
            .get_json::<PlaylistInfoResponse>(&api_url, playlist_id)
            .await?;
        Ok(PlaylistMetadata::from(info))
    }

    async fn fetch_first_page(&self, playlist_id: &str) -> Result<Page, FetchError> {
        let api_url = format!(
            "{uri}/playlists/{id}/tracks?additional_types=track&limit={limit}",
            uri = self.api_url(),
            id = playlist_id,
            limit = PAGE_LIMIT
        );

        let res = self
            .get_json::<PlaylistItemsResponse>(&api_url, playlist_id)
            .await?;
        Ok(Page::from(res))
    }

    async fn fetch_next_page(&self, next: &str) -> Result<Page, FetchError> {
        let res = self.get_json::<PlaylistItemsResponse>(next, next).await?;
        Ok(Page::from(res))
    }
}
