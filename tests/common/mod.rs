#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use exitspotify::{
    error::FetchError,
    playlist::PageFetcher,
    types::{ExternalIds, Page, PlaylistItem, PlaylistMetadata, TrackAlbum, TrackArtist, TrackObject},
};

pub const PLAYLIST_ID: &str = "37i9dQZF1DXcBWIGoYBM5M";

// Helper function to create a playlist item with a track
pub fn item(title: &str, artists: &[&str], album: &str, duration_ms: u64, isrc: Option<&str>) -> PlaylistItem {
    PlaylistItem {
        track: Some(TrackObject {
            name: title.to_string(),
            artists: artists
                .iter()
                .map(|name| TrackArtist {
                    name: name.to_string(),
                })
                .collect(),
            album: Some(TrackAlbum {
                name: album.to_string(),
            }),
            duration_ms,
            external_ids: Some(ExternalIds {
                isrc: isrc.map(str::to_string),
            }),
        }),
    }
}

// Helper function to create an item whose track was removed
pub fn removed() -> PlaylistItem {
    PlaylistItem { track: None }
}

/// In-memory page source. Page `n` links to page `n + 1` via `"page-<n+1>"`.
pub struct MockFetcher {
    pub metadata: Result<PlaylistMetadata, String>,
    pub pages: Vec<Vec<PlaylistItem>>,
    pub fail_on_page: Option<usize>,
    pub page_requests: AtomicUsize,
}

impl MockFetcher {
    pub fn new(name: &str, pages: Vec<Vec<PlaylistItem>>) -> Self {
        Self {
            metadata: Ok(PlaylistMetadata {
                name: name.to_string(),
                cover_url: Some("https://i.scdn.co/image/cover".to_string()),
                owner_name: Some("someone".to_string()),
                external_url: Some(format!("https://open.spotify.com/playlist/{}", PLAYLIST_ID)),
            }),
            pages,
            fail_on_page: None,
            page_requests: AtomicUsize::new(0),
        }
    }

    pub fn not_found() -> Self {
        Self {
            metadata: Err("no such playlist".to_string()),
            ..Self::new("", vec![vec![]])
        }
    }

    pub fn failing_on(mut self, page: usize) -> Self {
        self.fail_on_page = Some(page);
        self
    }

    pub fn requests(&self) -> usize {
        self.page_requests.load(Ordering::SeqCst)
    }

    fn page(&self, index: usize) -> Result<Page, FetchError> {
        self.page_requests.fetch_add(1, Ordering::SeqCst);

        if self.fail_on_page == Some(index) {
            return Err(FetchError::RateLimited {
                retry_after: Some(30),
            });
        }

        let items = self
            .pages
            .get(index)
            .cloned()
            .ok_or_else(|| FetchError::Other(format!("no page {}", index)))?;
        let next = (index + 1 < self.pages.len()).then(|| format!("page-{}", index + 1));

        Ok(Page { items, next })
    }
}

impl PageFetcher for MockFetcher {
    async fn fetch_metadata(&self, _playlist_id: &str) -> Result<PlaylistMetadata, FetchError> {
        match &self.metadata {
            Ok(metadata) => Ok(metadata.clone()),
            Err(e) => Err(FetchError::NotFound(e.clone())),
        }
    }

    async fn fetch_first_page(&self, _playlist_id: &str) -> Result<Page, FetchError> {
        self.page(0)
    }

    async fn fetch_next_page(&self, next: &str) -> Result<Page, FetchError> {
        let index = next
            .strip_prefix("page-")
            .and_then(|n| n.parse::<usize>().ok())
            .ok_or_else(|| FetchError::Other(format!("bad continuation {}", next)))?;
        self.page(index)
    }
}
