use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::Response;
use tracing::{instrument, warn};

use crate::error::GatewayError;
use crate::AppState;

// Separators arrive percent-encoded in a single path segment, so they
// still need an explicit check. Dots are legal in titles; only the bare
// `.` and `..` components can escape the cache directory once
// separators are banned. Crafted names get the same 404 as a miss.
fn filename_is_safe(filename: &str) -> bool {
	!filename.is_empty() && filename != "." && filename != ".." && !filename.contains('/') && !filename.contains('\\') && !filename.chars().any(char::is_control)
}

/// Serves a previously cached MP3 back as an attachment.
#[axum::debug_handler]
#[instrument(name = "cache_file", skip(state))]
pub async fn serve_cached_file(State(state): State<AppState>, Path(filename): Path<String>) -> Result<Response, GatewayError> {
	if !filename_is_safe(&filename) {
		warn!(%filename, "rejected unsafe cache filename");
		return Err(GatewayError::CacheMiss { filename });
	}

	let audio = state.cache.read(&filename).await.map_err(|err| match err.kind() {
		std::io::ErrorKind::NotFound => GatewayError::CacheMiss { filename: filename.clone() },
		_ => GatewayError::CacheIo(err),
	})?;

	let response = Response::builder()
		.header(CONTENT_TYPE, "audio/mpeg")
		.header(CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\""))
		.body(Body::from(audio))?;

	Ok(response)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cache::audio_filename;

	#[test]
	fn rejects_traversal_and_separator_filenames() {
		assert!(filename_is_safe("My_Song_.mp3"));
		assert!(!filename_is_safe(".."));
		assert!(!filename_is_safe("."));
		assert!(!filename_is_safe("../etc/passwd"));
		assert!(!filename_is_safe("a/b.mp3"));
		assert!(!filename_is_safe("a\\b.mp3"));
		assert!(!filename_is_safe(""));
		assert!(!filename_is_safe("bad\u{0}name.mp3"));
	}

	#[test]
	fn dotted_titles_stay_servable() {
		let filename = audio_filename("Song... (Live)");

		assert!(filename.contains(".."));
		assert!(filename_is_safe(&filename));
	}

	#[test]
	fn derived_filenames_always_pass_the_check() {
		assert!(filename_is_safe(&audio_filename("Weird /\\ Title!")));
		assert!(filename_is_safe(&audio_filename("")));
	}
}
