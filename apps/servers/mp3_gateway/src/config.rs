use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Parser, Clone, Debug, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct Config {
	/// Use JSON formatting for tracing
	#[arg(long, env = "LOG_JSON", default_value = "false")]
	pub log_json: bool,

	/// Log level
	#[arg(long, env = "RUST_LOG")]
	pub rust_log: Option<String>,

	/// Server host
	#[arg(long, env = "HOST", default_value = "0.0.0.0")]
	pub host: String,

	/// Server port
	#[arg(long, env = "PORT", default_value = "3000")]
	pub port: u16,

	/// Directory the downloaded audio files are cached in
	#[arg(long, env = "CACHE_DIR", default_value = "/tmp/cache")]
	pub cache_dir: String,

	/// Base URL of the poll-based conversion service
	#[arg(long, env = "SAVENOW_BASE_URL", default_value = "https://p.savenow.to")]
	pub savenow_base_url: String,

	/// Base URL of the synchronous conversion service
	#[arg(long, env = "FLVTO_BASE_URL", default_value = "https://es.flvto.top")]
	pub flvto_base_url: String,

	/// Outbound request timeout in seconds
	#[arg(long, env = "REQUEST_TIMEOUT", default_value = "30")]
	pub request_timeout: u64,

	/// Delay between conversion progress polls in milliseconds
	#[arg(long, env = "POLL_INTERVAL_MS", default_value = "1500")]
	pub poll_interval_ms: u64,

	/// Maximum number of progress polls before a conversion times out
	#[arg(long, env = "POLL_MAX_ATTEMPTS", default_value = "30")]
	pub poll_max_attempts: u32,
}
