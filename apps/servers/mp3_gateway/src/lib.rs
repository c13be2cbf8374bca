use converter_sdk::{FlvtoClient, PollConfig, SavenowClient};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{filter::EnvFilter, fmt::format::JsonFields, util::SubscriberInitExt, Layer};

pub mod cache;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

pub use cache::{audio_filename, CacheStore};
pub use config::Config;
pub use error::GatewayError;

/// Signature carried on every JSON body the gateway emits.
pub const AUTHOR: &str = "Somby Ny Aina";

#[derive(Clone)]
pub struct AppState {
	pub config: Arc<Config>,
	pub cache: CacheStore,
	pub savenow: SavenowClient,
	pub flvto: FlvtoClient,
}

impl AppState {
	/// Creates the cache directory and both upstream clients from the parsed
	/// configuration.
	pub fn build(config: Arc<Config>) -> anyhow::Result<Self> {
		let cache = CacheStore::new(&config.cache_dir)?;
		let timeout = Duration::from_secs(config.request_timeout);

		let poll = PollConfig {
			interval: Duration::from_millis(config.poll_interval_ms),
			max_attempts: config.poll_max_attempts,
		};
		let savenow = SavenowClient::new(config.savenow_base_url.clone(), timeout, poll)?;
		let flvto = FlvtoClient::new(config.flvto_base_url.clone(), timeout)?;

		Ok(Self {
			config,
			cache,
			savenow,
			flvto,
		})
	}
}

#[must_use]
pub fn init_tracing(config: &Config) -> Option<()> {
	use std::str::FromStr;
	use tracing_subscriber::layer::SubscriberExt;

	let filter = EnvFilter::from_str(config.rust_log.as_deref()?).unwrap();

	tracing_subscriber::registry()
		.with(if config.log_json {
			Box::new(
				tracing_subscriber::fmt::layer()
					.fmt_fields(JsonFields::default())
					.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
					.with_filter(filter),
			) as Box<dyn Layer<_> + Send + Sync>
		} else {
			Box::new(
				tracing_subscriber::fmt::layer()
					.event_format(tracing_subscriber::fmt::format().pretty())
					.with_filter(filter),
			)
		})
		.init();
	None
}
