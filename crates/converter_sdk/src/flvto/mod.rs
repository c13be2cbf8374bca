use bytes::Bytes;
use reqwest::header::USER_AGENT;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

use crate::headers::{flvto_headers, BROWSER_USER_AGENT};

// Custom error type for the synchronous conversion client
#[derive(Debug, thiserror::Error)]
pub enum FlvtoError {
	#[error("upstream rejected the conversion")]
	Rejected { response: Value },

	#[error("audio download failed with status {status}")]
	Download { status: StatusCode },

	#[error("request failed: {0}")]
	Request(#[from] reqwest::Error),
}

/// A completed conversion as reported by the service. `filesize` and
/// `duration` are display labels, not values to compute with; the service
/// sends numbers or strings depending on the day.
#[derive(Debug, Clone)]
pub struct Conversion {
	pub title: String,
	pub link: String,
	pub filesize: Option<String>,
	pub duration: Option<String>,
}

impl Conversion {
	/// Anything other than an explicit ok status with a populated link is a
	/// rejection.
	fn from_value(response: &Value) -> Option<Self> {
		if response.get("status").and_then(Value::as_str) != Some("ok") {
			return None;
		}
		let link = response.get("link").and_then(Value::as_str).filter(|link| !link.is_empty())?;

		Some(Self {
			title: response.get("title").and_then(Value::as_str).unwrap_or("Unknown Title").to_string(),
			link: link.to_string(),
			filesize: label(response.get("filesize")),
			duration: label(response.get("duration")),
		})
	}
}

fn label(value: Option<&Value>) -> Option<String> {
	match value {
		Some(Value::String(text)) => Some(text.clone()),
		Some(Value::Number(number)) => Some(number.to_string()),
		_ => None,
	}
}

/// Client for the synchronous conversion service.
#[derive(Debug, Clone)]
pub struct FlvtoClient {
	client: Client,
	base_url: String,
}

impl FlvtoClient {
	pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FlvtoError> {
		let client = Client::builder().timeout(timeout).build()?;

		Ok(Self {
			client,
			base_url: base_url.into(),
		})
	}

	/// Requests an MP3 conversion for a video id. The result arrives in the
	/// same response; there is no job to poll.
	pub async fn convert(&self, video_id: &str) -> Result<Conversion, FlvtoError> {
		let response = self
			.client
			.post(format!("{}/converter", self.base_url))
			.headers(flvto_headers())
			.json(&json!({ "id": video_id, "fileType": "mp3" }))
			.send()
			.await?
			.json::<Value>()
			.await?;

		match Conversion::from_value(&response) {
			Some(conversion) => Ok(conversion),
			None => Err(FlvtoError::Rejected { response }),
		}
	}

	/// Fetches the converted audio. The download host only needs the user
	/// agent, not the full impersonation set.
	pub async fn download(&self, url: &str) -> Result<Bytes, FlvtoError> {
		let response = self.client.get(url).header(USER_AGENT, BROWSER_USER_AGENT).send().await?;

		let status = response.status();
		if !status.is_success() {
			return Err(FlvtoError::Download { status });
		}

		Ok(response.bytes().await?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn conversion_requires_ok_status_and_link() {
		let accepted = Conversion::from_value(&json!({
			"status": "ok",
			"title": "Test Song",
			"link": "https://cdn.example/a.mp3",
			"filesize": "3.4 MB",
			"duration": "03:27"
		}))
		.unwrap();

		assert_eq!(accepted.title, "Test Song");
		assert_eq!(accepted.link, "https://cdn.example/a.mp3");
		assert_eq!(accepted.filesize.as_deref(), Some("3.4 MB"));
		assert_eq!(accepted.duration.as_deref(), Some("03:27"));

		assert!(Conversion::from_value(&json!({ "status": "error" })).is_none());
		assert!(Conversion::from_value(&json!({ "status": "ok" })).is_none());
		assert!(Conversion::from_value(&json!({ "status": "ok", "link": "" })).is_none());
		assert!(Conversion::from_value(&json!({ "link": "https://cdn.example/a.mp3" })).is_none());
	}

	#[test]
	fn missing_title_gets_a_placeholder() {
		let conversion = Conversion::from_value(&json!({ "status": "ok", "link": "https://cdn.example/a.mp3" })).unwrap();
		assert_eq!(conversion.title, "Unknown Title");
		assert_eq!(conversion.filesize, None);
		assert_eq!(conversion.duration, None);
	}

	#[test]
	fn numeric_labels_become_strings() {
		let conversion = Conversion::from_value(&json!({
			"status": "ok",
			"link": "https://cdn.example/a.mp3",
			"filesize": 3571712,
			"duration": 207
		}))
		.unwrap();

		assert_eq!(conversion.filesize.as_deref(), Some("3571712"));
		assert_eq!(conversion.duration.as_deref(), Some("207"));
	}
}
