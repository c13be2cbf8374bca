use serde::Serialize;

use crate::AUTHOR;

pub mod cache_files;
pub mod flvto;
pub mod health;
pub mod savenow;

/// Success payload shared by both conversion endpoints. Each flow fills
/// the fields it produces; unset ones stay out of the JSON entirely.
#[derive(Debug, Serialize)]
pub struct DownloadResponse {
	pub message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub download: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub music: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub thumbnail: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub filesize: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub duration: Option<String>,
	#[serde(rename = "videoId", skip_serializing_if = "Option::is_none")]
	pub video_id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub waited: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bitrate: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub source: Option<&'static str>,
	pub author: &'static str,
}

impl Default for DownloadResponse {
	fn default() -> Self {
		Self {
			message: String::new(),
			title: None,
			download: None,
			music: None,
			thumbnail: None,
			filesize: None,
			duration: None,
			video_id: None,
			waited: None,
			bitrate: None,
			source: None,
			author: AUTHOR,
		}
	}
}
