use axum::extract::{Query, State};
use axum::Json;
use converter_sdk::watch_url;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::GatewayError;
use crate::handlers::DownloadResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SavenowParams {
	pub id: Option<String>,
	pub link: Option<String>,
}

impl SavenowParams {
	/// A full link wins over a bare id; a bare id becomes a watch URL.
	fn video_url(self) -> Option<String> {
		self
			.link
			.filter(|link| !link.is_empty())
			.or_else(|| self.id.filter(|id| !id.is_empty()).map(|id| watch_url(&id)))
	}
}

/// Runs a conversion through the poll-based service and answers with the
/// hosted download link once progress reaches completion.
#[axum::debug_handler]
#[instrument(name = "ymp3", skip(state))]
pub async fn download_mp3(State(state): State<AppState>, Query(params): Query<SavenowParams>) -> Result<Json<DownloadResponse>, GatewayError> {
	let video_url = params.video_url().ok_or(GatewayError::MissingSource)?;

	info!(url = %video_url, "submitting conversion");

	let job = state.savenow.submit(&video_url).await?;
	let ready = state.savenow.wait_for_link(&job.progress_url).await?;

	info!(waited = ready.attempts, "download link ready");

	Ok(Json(DownloadResponse {
		message: "MP3 link ready 🎶".to_string(),
		title: Some(job.resolved_title()),
		download: Some(ready.download_url),
		thumbnail: job.thumbnail(),
		waited: Some(ready.attempts),
		..DownloadResponse::default()
	}))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn link_wins_over_id() {
		let params = SavenowParams {
			id: Some("ZIlALB1fQVE".to_string()),
			link: Some("https://youtu.be/abcd1234xyz".to_string()),
		};

		assert_eq!(params.video_url().as_deref(), Some("https://youtu.be/abcd1234xyz"));
	}

	#[test]
	fn bare_id_expands_to_a_watch_url() {
		let params = SavenowParams {
			id: Some("ZIlALB1fQVE".to_string()),
			link: None,
		};

		assert_eq!(params.video_url().as_deref(), Some("https://www.youtube.com/watch?v=ZIlALB1fQVE"));
	}

	#[test]
	fn empty_values_count_as_absent() {
		let params = SavenowParams {
			id: Some(String::new()),
			link: Some(String::new()),
		};

		assert_eq!(params.video_url(), None);
	}
}
