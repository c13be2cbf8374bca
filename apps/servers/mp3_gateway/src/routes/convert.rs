use crate::AppState;
use axum::routing::get;
use axum::{extract::FromRef, http::Method, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{flvto, savenow};

pub fn get_convert<S>() -> Router<S>
where
	S: Clone + Send + Sync + 'static,
	AppState: FromRef<S>,
{
	let cors = CorsLayer::new().allow_origin(Any).allow_methods([Method::GET]).allow_headers(Any);

	Router::new()
		// Poll-based conversion answering with a hosted download link
		.route("/ymp3", get(savenow::download_mp3))
		// Synchronous conversion cached on local disk
		.route("/ytmp3", get(flvto::download_mp3))
		.layer(cors)
}
