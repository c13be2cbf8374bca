use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::headers::savenow_headers;

/// Progress value the service reports once a conversion is complete.
pub const PROGRESS_COMPLETE: f64 = 1000.0;

// Custom error type for the poll-based conversion client
#[derive(Debug, thiserror::Error)]
pub enum SavenowError {
	#[error("conversion was not accepted upstream")]
	NotAccepted { response: Value },

	#[error("upstream reported the conversion as failed")]
	Failed { response: Value },

	#[error("no download link after {attempts} progress polls")]
	Timeout { attempts: u32 },

	#[error("request failed: {0}")]
	Request(#[from] reqwest::Error),
}

/// Pacing of the progress poll loop.
#[derive(Debug, Clone)]
pub struct PollConfig {
	pub interval: Duration,
	pub max_attempts: u32,
}

impl Default for PollConfig {
	fn default() -> Self {
		Self {
			interval: Duration::from_millis(1500),
			max_attempts: 30,
		}
	}
}

/// An accepted conversion, alive for the duration of the poll loop.
#[derive(Debug, Clone)]
pub struct ConversionJob {
	pub title: Option<String>,
	pub info: Value,
	pub progress_url: String,
}

impl ConversionJob {
	/// A submission response without a progress URL means the job was never
	/// accepted, whatever else the payload says.
	fn from_value(response: &Value) -> Option<Self> {
		let progress_url = response.get("progress_url").and_then(Value::as_str).filter(|url| !url.is_empty())?;

		Some(Self {
			title: response.get("title").and_then(Value::as_str).map(str::to_string),
			info: response.get("info").cloned().unwrap_or(Value::Null),
			progress_url: progress_url.to_string(),
		})
	}

	/// Title from the submission response, falling back to the metadata blob.
	#[must_use]
	pub fn resolved_title(&self) -> String {
		self
			.title
			.clone()
			.filter(|title| !title.is_empty())
			.or_else(|| self.info.get("title").and_then(Value::as_str).map(str::to_string))
			.unwrap_or_default()
	}

	#[must_use]
	pub fn thumbnail(&self) -> Option<String> {
		self.info.get("image").and_then(Value::as_str).map(str::to_string)
	}
}

/// State of a conversion as reported by one progress snapshot. Every poll
/// supersedes the previous one; nothing is accumulated across iterations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
	Pending,
	Ready(String),
	Failed,
}

impl PollOutcome {
	/// Ready requires the success flag, the completion threshold and a
	/// populated download link all at once. A payload missing any of the
	/// three stays Pending unless it carries the explicit error marker.
	#[must_use]
	pub fn classify(progress: &Value) -> Self {
		let complete = progress.get("progress").and_then(Value::as_f64).unwrap_or(0.0) >= PROGRESS_COMPLETE;
		let download_url = progress.get("download_url").and_then(Value::as_str).filter(|url| !url.is_empty());

		if truthy(progress.get("success")) && complete {
			if let Some(url) = download_url {
				return Self::Ready(url.to_string());
			}
		}

		if progress.get("text").and_then(Value::as_str) == Some("error") {
			return Self::Failed;
		}

		Self::Pending
	}
}

// The service flips between booleans, numbers and strings for its success
// flag depending on the endpoint revision.
fn truthy(value: Option<&Value>) -> bool {
	match value {
		Some(Value::Bool(flag)) => *flag,
		Some(Value::Number(number)) => number.as_f64().is_some_and(|number| number != 0.0),
		Some(Value::String(text)) => !text.is_empty(),
		Some(Value::Array(items)) => !items.is_empty(),
		Some(Value::Object(entries)) => !entries.is_empty(),
		Some(Value::Null) | None => false,
	}
}

/// A download link that became ready, along with the number of poll
/// iterations it took to get there.
#[derive(Debug, Clone)]
pub struct ReadyLink {
	pub download_url: String,
	pub attempts: u32,
}

/// Client for the poll-based conversion service.
#[derive(Debug, Clone)]
pub struct SavenowClient {
	client: Client,
	base_url: String,
	poll: PollConfig,
}

impl SavenowClient {
	pub fn new(base_url: impl Into<String>, timeout: Duration, poll: PollConfig) -> Result<Self, SavenowError> {
		let client = Client::builder().default_headers(savenow_headers()).timeout(timeout).build()?;

		Ok(Self {
			client,
			base_url: base_url.into(),
			poll,
		})
	}

	/// Submits a video URL for conversion. The response body is parsed
	/// whatever the HTTP status, so a rejection payload still surfaces in
	/// `NotAccepted` for diagnosis.
	pub async fn submit(&self, video_url: &str) -> Result<ConversionJob, SavenowError> {
		let response = self
			.client
			.get(format!("{}/ajax/download.php", self.base_url))
			.query(&[("format", "mp3"), ("url", video_url)])
			.send()
			.await?
			.json::<Value>()
			.await?;

		match ConversionJob::from_value(&response) {
			Some(job) => Ok(job),
			None => Err(SavenowError::NotAccepted { response }),
		}
	}

	/// Polls the progress URL until the download link is ready, the service
	/// reports a failure, or the attempt budget runs out. The interval is
	/// fixed; there is no backoff and no retry of individual polls.
	pub async fn wait_for_link(&self, progress_url: &str) -> Result<ReadyLink, SavenowError> {
		for attempt in 0..self.poll.max_attempts {
			let progress = self.client.get(progress_url).send().await?.json::<Value>().await?;

			match PollOutcome::classify(&progress) {
				PollOutcome::Ready(download_url) => {
					return Ok(ReadyLink {
						download_url,
						attempts: attempt,
					})
				}
				PollOutcome::Failed => return Err(SavenowError::Failed { response: progress }),
				PollOutcome::Pending => {}
			}

			tracing::debug!(attempt, "conversion still pending");
			tokio::time::sleep(self.poll.interval).await;
		}

		tracing::warn!(attempts = self.poll.max_attempts, "conversion polling exhausted");
		Err(SavenowError::Timeout {
			attempts: self.poll.max_attempts,
		})
	}
}
