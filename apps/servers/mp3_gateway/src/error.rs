use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use converter_sdk::{FlvtoError, SavenowError};
use serde_json::{json, Value};

use crate::AUTHOR;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
	#[error("Missing video link or id")]
	MissingSource,

	#[error("Missing \"link\" query parameter")]
	MissingLink,

	#[error("Invalid YouTube link")]
	InvalidLink { link: String },

	#[error("Failed to start conversion")]
	SubmissionRejected { response: Value },

	#[error("Conversion failed")]
	UpstreamFailed { response: Value },

	#[error("Conversion timeout - please try again")]
	PollTimeout { attempts: u32 },

	#[error("Conversion failed")]
	ConversionRejected { response: Value, video_id: String },

	#[error("Internal error while fetching MP3")]
	Fetch(#[source] reqwest::Error),

	#[error("Internal server error")]
	Internal(#[source] reqwest::Error),

	#[error("Internal server error")]
	AudioFetchFailed { status: StatusCode },

	#[error("Internal server error")]
	CacheIo(#[from] std::io::Error),

	#[error("Internal server error")]
	ResponseBuild(#[from] axum::http::Error),

	#[error("File not found")]
	CacheMiss { filename: String },
}

impl GatewayError {
	pub const fn status_code(&self) -> StatusCode {
		match self {
			Self::MissingSource | Self::MissingLink | Self::InvalidLink { .. } => StatusCode::BAD_REQUEST,
			Self::CacheMiss { .. } => StatusCode::NOT_FOUND,
			Self::SubmissionRejected { .. }
			| Self::UpstreamFailed { .. }
			| Self::PollTimeout { .. }
			| Self::ConversionRejected { .. }
			| Self::Fetch(_)
			| Self::Internal(_)
			| Self::AudioFetchFailed { .. }
			| Self::CacheIo(_)
			| Self::ResponseBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Maps errors from the synchronous conversion client, attaching the
	/// resolved id so a rejection can name the video it was for.
	pub fn from_flvto(err: FlvtoError, video_id: &str) -> Self {
		match err {
			FlvtoError::Rejected { response } => Self::ConversionRejected {
				response,
				video_id: video_id.to_string(),
			},
			FlvtoError::Download { status } => Self::AudioFetchFailed { status },
			FlvtoError::Request(err) => Self::Internal(err),
		}
	}

	fn into_body(self) -> Value {
		let message = self.to_string();

		match self {
			Self::MissingSource => json!({
				"message": message,
				"usage": "/ymp3?link=https://youtube.com/watch?v=...",
				"author": AUTHOR,
			}),
			Self::MissingLink => json!({
				"message": message,
				"usage": "/ytmp3?link=https://youtu.be/abcd1234",
				"examples": [
					"/ytmp3?link=https://youtu.be/ZIlALB1fQVE",
					"/ytmp3?link=https://www.youtube.com/watch?v=ZIlALB1fQVE",
					"/ytmp3?link=https://youtube.com/watch?v=ZIlALB1fQVE",
					"/ytmp3?link=https://m.youtube.com/watch?v=ZIlALB1fQVE",
					"/ytmp3?link=https://youtube.com/embed/ZIlALB1fQVE",
					"/ytmp3?link=https://youtube.com/shorts/ZIlALB1fQVE",
				],
				"author": AUTHOR,
			}),
			Self::InvalidLink { link } => json!({
				"message": message,
				"supported_formats": [
					"youtu.be/ID",
					"youtube.com/watch?v=ID",
					"www.youtube.com/watch?v=ID",
					"m.youtube.com/watch?v=ID",
					"youtube.com/embed/ID",
					"youtube.com/shorts/ID",
					"youtube.com/v/ID",
				],
				"your_link": link,
				"author": AUTHOR,
			}),
			Self::SubmissionRejected { response } | Self::UpstreamFailed { response } => json!({
				"message": message,
				"response": response,
				"author": AUTHOR,
			}),
			Self::ConversionRejected { response, video_id } => json!({
				"message": message,
				"response": response,
				"videoId": video_id,
				"author": AUTHOR,
			}),
			Self::Fetch(err) | Self::Internal(err) => json!({
				"message": message,
				"error": err.to_string(),
				"author": AUTHOR,
			}),
			Self::AudioFetchFailed { status } => json!({
				"message": message,
				"error": format!("audio download failed with status {status}"),
				"author": AUTHOR,
			}),
			Self::CacheIo(err) => json!({
				"message": message,
				"error": err.to_string(),
				"author": AUTHOR,
			}),
			Self::ResponseBuild(err) => json!({
				"message": message,
				"error": err.to_string(),
				"author": AUTHOR,
			}),
			Self::PollTimeout { .. } | Self::CacheMiss { .. } => json!({
				"message": message,
				"author": AUTHOR,
			}),
		}
	}
}

impl From<SavenowError> for GatewayError {
	fn from(err: SavenowError) -> Self {
		match err {
			SavenowError::NotAccepted { response } => Self::SubmissionRejected { response },
			SavenowError::Failed { response } => Self::UpstreamFailed { response },
			SavenowError::Timeout { attempts } => Self::PollTimeout { attempts },
			SavenowError::Request(err) => Self::Fetch(err),
		}
	}
}

impl IntoResponse for GatewayError {
	fn into_response(self) -> Response {
		let status = self.status_code();

		if status.is_server_error() {
			tracing::error!(%status, error = %self, "request failed");
		}

		(status, Json(self.into_body())).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn client_input_errors_are_bad_requests() {
		assert_eq!(GatewayError::MissingSource.status_code(), StatusCode::BAD_REQUEST);
		assert_eq!(GatewayError::MissingLink.status_code(), StatusCode::BAD_REQUEST);
		assert_eq!(
			GatewayError::InvalidLink { link: "nope".to_string() }.status_code(),
			StatusCode::BAD_REQUEST
		);
	}

	#[test]
	fn missing_link_body_lists_usage_examples() {
		let body = GatewayError::MissingLink.into_body();

		assert_eq!(body["message"], "Missing \"link\" query parameter");
		assert_eq!(body["usage"], "/ytmp3?link=https://youtu.be/abcd1234");
		assert_eq!(body["examples"].as_array().unwrap().len(), 6);
		assert_eq!(body["author"], AUTHOR);
	}

	#[test]
	fn invalid_link_echoes_the_input() {
		let body = GatewayError::InvalidLink {
			link: "https://vimeo.com/1".to_string(),
		}
		.into_body();

		assert_eq!(body["message"], "Invalid YouTube link");
		assert_eq!(body["your_link"], "https://vimeo.com/1");
		assert_eq!(body["supported_formats"].as_array().unwrap().len(), 7);
	}

	#[test]
	fn submission_rejection_carries_the_raw_payload() {
		let err = GatewayError::from(SavenowError::NotAccepted {
			response: json!({ "error": "bad link" }),
		});

		assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
		let body = err.into_body();
		assert_eq!(body["message"], "Failed to start conversion");
		assert_eq!(body["response"]["error"], "bad link");
	}

	#[test]
	fn flvto_rejection_reports_the_video_id() {
		let err = GatewayError::from_flvto(
			FlvtoError::Rejected {
				response: json!({ "status": "error" }),
			},
			"ZIlALB1fQVE",
		);

		assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
		let body = err.into_body();
		assert_eq!(body["message"], "Conversion failed");
		assert_eq!(body["videoId"], "ZIlALB1fQVE");
		assert_eq!(body["response"]["status"], "error");
	}

	#[test]
	fn poll_timeout_is_distinct_from_upstream_failure() {
		let timeout = GatewayError::from(SavenowError::Timeout { attempts: 30 });
		assert!(matches!(&timeout, GatewayError::PollTimeout { attempts: 30 }));
		assert_eq!(timeout.into_body()["message"], "Conversion timeout - please try again");

		let failed = GatewayError::from(SavenowError::Failed {
			response: json!({ "text": "error" }),
		});
		assert!(matches!(&failed, GatewayError::UpstreamFailed { .. }));
		assert_eq!(failed.into_body()["message"], "Conversion failed");
	}

	#[test]
	fn cache_miss_is_not_found() {
		let err = GatewayError::CacheMiss {
			filename: "doesnotexist.mp3".to_string(),
		};

		assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
		let body = err.into_body();
		assert_eq!(body["message"], "File not found");
		assert_eq!(body["author"], AUTHOR);
	}

	#[test]
	fn download_status_maps_to_an_internal_error() {
		let err = GatewayError::from_flvto(FlvtoError::Download { status: StatusCode::FORBIDDEN }, "ZIlALB1fQVE");

		assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
		let body = err.into_body();
		assert_eq!(body["message"], "Internal server error");
		assert_eq!(body["error"], "audio download failed with status 403 Forbidden");
	}
}
