use anyhow::Result;
use axum::Router;
use clap::Parser;
use mp3_gateway::init_tracing;
use mp3_gateway::routes::cache_files::get_cache_files;
use mp3_gateway::routes::convert::get_convert;
use mp3_gateway::routes::health::get_health;
use mp3_gateway::{AppState, Config};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<()> {
	dotenv::dotenv().ok();
	let config = Arc::new(Config::parse());
	let _ = init_tracing(&config);

	let state = AppState::build(config.clone())?;

	let app = Router::new()
		.merge(get_convert())
		.merge(get_cache_files())
		.merge(get_health())
		.with_state(state)
		.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

	let listener = TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;
	tracing::debug!("listening on {}", listener.local_addr()?);
	axum::serve(listener, app).await?;

	Ok(())
}
