use std::time::{SystemTime, UNIX_EPOCH};

use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use tracing::instrument;

use crate::AUTHOR;

#[axum::debug_handler]
#[instrument(name = "health")]
pub async fn health() -> impl IntoResponse {
	let timestamp = SystemTime::now().duration_since(UNIX_EPOCH).map(|elapsed| elapsed.as_secs_f64()).unwrap_or_default();

	Json(json!({ "status": "healthy", "timestamp": timestamp }))
}

/// Capability listing served at the root, doubling as API discovery.
#[axum::debug_handler]
#[instrument(name = "root")]
pub async fn root() -> impl IntoResponse {
	Json(json!({
		"message": "YouTube MP3 Downloader API",
		"endpoints": {
			"/ymp3": "Download using savenow.to service",
			"/ytmp3": "Download using flvto.top service with caching"
		},
		"author": AUTHOR,
	}))
}
