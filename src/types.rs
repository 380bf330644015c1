use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientCredentialsResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistInfoResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemsResponse {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

/// One entry of a playlist page. `track` is `null` for removed or
/// region-blocked tracks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<TrackObject>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackObject {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    #[serde(default)]
    pub album: Option<TrackAlbum>,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub external_ids: Option<ExternalIds>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalIds {
    pub isrc: Option<String>,
}

/// Descriptive data of a playlist, fetched once per extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistMetadata {
    pub name: String,
    pub cover_url: Option<String>,
    pub owner_name: Option<String>,
    pub external_url: Option<String>,
}

impl From<PlaylistInfoResponse> for PlaylistMetadata {
    fn from(info: PlaylistInfoResponse) -> Self {
        Self {
            name: info.name,
            cover_url: info
                .images
                .and_then(|images| images.into_iter().next())
                .map(|image| image.url)
                .filter(|url| !url.is_empty()),
            owner_name: info.owner.and_then(|o| o.display_name),
            external_url: info.external_urls.and_then(|e| e.spotify),
        }
    }
}

/// A page of playlist items plus the continuation to the next page, if any.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

impl From<PlaylistItemsResponse> for Page {
    fn from(res: PlaylistItemsResponse) -> Self {
        Self {
            items: res.items,
            next: res.next,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Performer names joined with [`ARTIST_SEPARATOR`](crate::playlist::ARTIST_SEPARATOR).
    pub artist: String,
    pub title: String,
    pub album: String,
    pub duration_ms: u64,
    /// ISRC, or `"N/A"` when the catalog has none.
    pub external_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistResult {
    pub name: String,
    pub cover_url: Option<String>,
    pub owner_name: Option<String>,
    pub external_url: Option<String>,
    pub tracks: Vec<TrackRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub count: usize,
    pub total_ms: u64,
    pub avg_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistFrequency {
    pub artist: String,
    pub count: usize,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "Artist")]
    pub artist: String,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Album")]
    pub album: String,
    #[tabled(rename = "Duration")]
    pub duration: String,
    #[tabled(rename = "ISRC")]
    pub isrc: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    #[tabled(rename = "Artist")]
    pub artist: String,
    #[tabled(rename = "Tracks")]
    pub count: usize,
}
