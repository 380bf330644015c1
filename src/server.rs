use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{Extension, Router, routing::get};
use tokio::sync::Mutex;

use crate::{Res, api, config, info, management::HistoryManager, playlist::PageFetcher};

/// Builds the service routes around a page source and a shared history.
pub fn router<F>(fetcher: Arc<F>, history: Arc<Mutex<HistoryManager>>) -> Router
where
    F: PageFetcher + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(api::health))
        .route("/api/playlist", get(api::playlist::<F>))
        .route("/api/playlist/csv", get(api::playlist_csv::<F>))
        .route("/api/history", get(api::history))
        .layer(Extension(fetcher))
        .layer(Extension(history))
}

pub async fn start_api_server<F>(fetcher: Arc<F>) -> Res<()>
where
    F: PageFetcher + Send + Sync + 'static,
{
    let app = router(fetcher, Arc::new(Mutex::new(HistoryManager::new())));

    let addr = SocketAddr::from_str(&config::server_addr())
        .map_err(|e| format!("Failed to parse server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
