use std::sync::Arc;

use axum::{Extension, Json};
use tokio::sync::Mutex;

use crate::management::{HistoryManager, RECENT_LIMIT};

pub async fn history(
    Extension(history): Extension<Arc<Mutex<HistoryManager>>>,
) -> Json<Vec<String>> {
    Json(history.lock().await.recent(RECENT_LIMIT))
}
