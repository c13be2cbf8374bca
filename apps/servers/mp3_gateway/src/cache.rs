use std::path::PathBuf;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
	static ref UNSAFE_CHARS: Regex = Regex::new(r"[^\w\-.]").unwrap();
}

/// Derives the on-disk filename for a converted track from its title.
///
/// Characters outside `[\w\-.]` collapse to underscores, doubled
/// underscores fold once, and the stem is capped at 200 characters
/// before the `.mp3` extension goes on. The same title always maps to
/// the same filename, which is what lets a repeat request hit the cache.
#[must_use]
pub fn audio_filename(title: &str) -> String {
	let sanitized = UNSAFE_CHARS.replace_all(title, "_").replace("__", "_");
	let stem: String = sanitized.chars().take(200).collect();

	format!("{stem}.mp3")
}

/// Directory-backed store for converted audio, keyed by filename.
#[derive(Clone, Debug)]
pub struct CacheStore {
	dir: PathBuf,
}

impl CacheStore {
	pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
		let dir = dir.into();
		std::fs::create_dir_all(&dir)?;

		Ok(Self { dir })
	}

	#[must_use]
	pub fn path(&self, filename: &str) -> PathBuf {
		self.dir.join(filename)
	}

	#[must_use]
	pub fn exists(&self, filename: &str) -> bool {
		self.path(filename).is_file()
	}

	pub async fn write(&self, filename: &str, audio: &[u8]) -> std::io::Result<()> {
		tokio::fs::write(self.path(filename), audio).await
	}

	pub async fn read(&self, filename: &str) -> std::io::Result<Vec<u8>> {
		tokio::fs::read(self.path(filename)).await
	}
}
