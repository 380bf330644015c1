use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Extension, Form, Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use exitspotify::{
    error::{Error, FetchError},
    playlist,
    spotify::SpotifyClient,
};
use serde_json::json;

const PLAYLIST_ID: &str = "37i9dQZF1DXcBWIGoYBM5M";
// base64("client:secret")
const BASIC_AUTH: &str = "Basic Y2xpZW50OnNlY3JldA==";

#[derive(Clone)]
struct Base(String);

// Request counters shared between the stub handlers and the test body.
#[derive(Default)]
struct Hits {
    token: AtomicUsize,
    flaky: AtomicUsize,
    down: AtomicUsize,
    expiring: AtomicUsize,
}

async fn token(
    Extension(hits): Extension<Arc<Hits>>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    hits.token.fetch_add(1, Ordering::SeqCst);
    let authorized = headers
        .get(header::AUTHORIZATION)
        .is_some_and(|v| v == BASIC_AUTH);
    if !authorized || form.get("grant_type").map(String::as_str) != Some("client_credentials") {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "invalid_client" }))).into_response();
    }

    Json(json!({
        "access_token": "test-token",
        "token_type": "Bearer",
        "expires_in": 3600
    }))
    .into_response()
}

fn bearer_ok(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .is_some_and(|v| v == "Bearer test-token")
}

async fn playlist_info(Path(id): Path<String>, headers: HeaderMap) -> Response {
    if !bearer_ok(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    match id.as_str() {
        PLAYLIST_ID => Json(json!({
            "name": "Stub Mix",
            "images": [{ "url": "https://i.scdn.co/image/stub" }],
            "owner": { "display_name": "stub-user" },
            "external_urls": { "spotify": "https://open.spotify.com/playlist/stub" }
        }))
        .into_response(),
        "privatePlaylist0000000" => (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": { "status": 403, "message": "Forbidden" } })),
        )
            .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": { "status": 404, "message": "Resource not found" } })),
        )
            .into_response(),
    }
}

async fn first_page(Extension(Base(base)): Extension<Base>, headers: HeaderMap) -> Response {
    if !bearer_ok(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({
        "items": [
            { "track": {
                "name": "First",
                "artists": [{ "name": "A" }, { "name": "B" }],
                "album": { "name": "Album One" },
                "duration_ms": 125000,
                "external_ids": { "isrc": "USRC17607839" }
            } },
            { "track": null }
        ],
        "next": format!("{}/v1/pages/2", base),
        "total": 3
    }))
    .into_response()
}

async fn second_page(headers: HeaderMap) -> Response {
    if !bearer_ok(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({
        "items": [
            { "track": {
                "name": "Third",
                "artists": [{ "name": "C" }],
                "album": { "name": "Album Three" },
                "duration_ms": 61000,
                "external_ids": {}
            } }
        ],
        "next": null,
        "total": 3
    }))
    .into_response()
}

async fn rate_limited() -> Response {
    (StatusCode::TOO_MANY_REQUESTS, [(header::RETRY_AFTER, "7")]).into_response()
}

fn empty_page() -> Response {
    Json(json!({ "items": [], "next": null })).into_response()
}

// 502 on the first request only.
async fn flaky(Extension(hits): Extension<Arc<Hits>>) -> Response {
    if hits.flaky.fetch_add(1, Ordering::SeqCst) == 0 {
        return (StatusCode::BAD_GATEWAY, "upstream hiccup").into_response();
    }
    empty_page()
}

async fn down(Extension(hits): Extension<Arc<Hits>>) -> Response {
    hits.down.fetch_add(1, Ordering::SeqCst);
    (StatusCode::BAD_GATEWAY, "upstream down").into_response()
}

// Rejects the first bearer token it sees, as if it had just expired.
async fn expiring(Extension(hits): Extension<Arc<Hits>>, headers: HeaderMap) -> Response {
    if hits.expiring.fetch_add(1, Ordering::SeqCst) == 0 || !bearer_ok(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "status": 401, "message": "The access token expired" } })),
        )
            .into_response();
    }
    empty_page()
}

async fn spawn_stub() -> (String, Arc<Hits>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let hits = Arc::new(Hits::default());

    let app = Router::new()
        .route("/api/token", post(token))
        .route("/v1/playlists/{id}", get(playlist_info))
        .route("/v1/playlists/{id}/tracks", get(first_page))
        .route("/v1/pages/2", get(second_page))
        .route("/v1/limited", get(rate_limited))
        .route("/v1/flaky", get(flaky))
        .route("/v1/down", get(down))
        .route("/v1/expiring", get(expiring))
        .layer(Extension(Base(base.clone())))
        .layer(Extension(hits.clone()));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (base, hits)
}

fn client(base: &str, secret: &str) -> SpotifyClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    SpotifyClient::with_http_client(
        http,
        format!("{}/v1/", base),
        format!("{}/api/token", base),
        "client".to_string(),
        secret.to_string(),
    )
}

#[tokio::test]
async fn test_client_extracts_all_pages() {
    let (base, _) = spawn_stub().await;
    let client = client(&base, "secret");
    assert_eq!(client.api_url(), format!("{}/v1", base));

    let url = format!("https://open.spotify.com/playlist/{}?si=abc", PLAYLIST_ID);
    let result = playlist::fetch_playlist(&url, &client).await.unwrap();

    assert_eq!(result.name, "Stub Mix");
    assert_eq!(result.owner_name.as_deref(), Some("stub-user"));
    assert_eq!(result.cover_url.as_deref(), Some("https://i.scdn.co/image/stub"));
    assert_eq!(result.tracks.len(), 2);
    assert_eq!(result.tracks[0].artist, "A, B");
    assert_eq!(result.tracks[0].external_id, "USRC17607839");
    assert_eq!(result.tracks[1].title, "Third");
    assert_eq!(result.tracks[1].external_id, "N/A");
}

#[tokio::test]
async fn test_client_maps_not_found_and_forbidden() {
    let (base, _) = spawn_stub().await;
    let client = client(&base, "secret");

    let missing = playlist::extract("doesNotExist0000000000", &client).await;
    assert!(matches!(missing, Err(Error::Fetch(FetchError::NotFound(_)))));

    let private = playlist::extract("privatePlaylist0000000", &client).await;
    assert!(matches!(private, Err(Error::Fetch(FetchError::Forbidden(_)))));
}

#[tokio::test]
async fn test_client_maps_rate_limit() {
    use exitspotify::playlist::PageFetcher;

    let (base, _) = spawn_stub().await;
    let client = client(&base, "secret");

    let res = client.fetch_next_page(&format!("{}/v1/limited", base)).await;
    assert!(matches!(
        res,
        Err(FetchError::RateLimited {
            retry_after: Some(7)
        })
    ));
}

#[tokio::test]
async fn test_client_rejected_credentials() {
    let (base, _) = spawn_stub().await;
    let client = client(&base, "wrong");

    let result = playlist::extract(PLAYLIST_ID, &client).await;
    assert!(matches!(result, Err(Error::Fetch(FetchError::Unauthorized(_)))));
}

#[tokio::test]
async fn test_client_retries_bad_gateway_once() {
    use exitspotify::playlist::PageFetcher;

    let (base, hits) = spawn_stub().await;
    let client = client(&base, "secret");

    let page = client
        .fetch_next_page(&format!("{}/v1/flaky", base))
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert!(page.next.is_none());
    assert_eq!(hits.flaky.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_client_gives_up_after_max_attempts() {
    use exitspotify::{playlist::PageFetcher, spotify::MAX_ATTEMPTS};

    let (base, hits) = spawn_stub().await;
    let client = client(&base, "secret");

    let res = client.fetch_next_page(&format!("{}/v1/down", base)).await;
    match res {
        Err(FetchError::Status { status, .. }) => assert_eq!(status, StatusCode::BAD_GATEWAY),
        other => panic!("expected a 502 status error, got {:?}", other.map(|p| p.items.len())),
    }
    assert_eq!(hits.down.load(Ordering::SeqCst), MAX_ATTEMPTS as usize);
}

#[tokio::test]
async fn test_client_renews_token_after_unauthorized() {
    use exitspotify::playlist::PageFetcher;

    let (base, hits) = spawn_stub().await;
    let client = client(&base, "secret");
    let url = format!("{}/v1/expiring", base);

    let first = client.fetch_next_page(&url).await;
    assert!(matches!(first, Err(FetchError::Unauthorized(_))));
    assert_eq!(hits.token.load(Ordering::SeqCst), 1);

    let second = client.fetch_next_page(&url).await.unwrap();
    assert!(second.items.is_empty());
    assert_eq!(hits.token.load(Ordering::SeqCst), 2);
}
