use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
	/// Recognized URL shapes, tried in order. Several patterns overlap on the
	/// same input, so the order is part of the extraction contract.
	static ref URL_PATTERNS: [Regex; 10] = [
		// youtu.be/ID
		Regex::new(r"youtu\.be/([a-zA-Z0-9_-]{11})").unwrap(),
		// youtube.com/watch?v=ID
		Regex::new(r"youtube\.com/watch\?v=([a-zA-Z0-9_-]{11})").unwrap(),
		// youtube.com/v/ID
		Regex::new(r"youtube\.com/v/([a-zA-Z0-9_-]{11})").unwrap(),
		// youtube.com/embed/ID
		Regex::new(r"youtube\.com/embed/([a-zA-Z0-9_-]{11})").unwrap(),
		// youtube.com/shorts/ID
		Regex::new(r"youtube\.com/shorts/([a-zA-Z0-9_-]{11})").unwrap(),
		// www.youtube.com/watch?v=ID
		Regex::new(r"www\.youtube\.com/watch\?v=([a-zA-Z0-9_-]{11})").unwrap(),
		// m.youtube.com/watch?v=ID
		Regex::new(r"m\.youtube\.com/watch\?v=([a-zA-Z0-9_-]{11})").unwrap(),
		// youtu.be/ID?param=value
		Regex::new(r"youtu\.be/([a-zA-Z0-9_-]{11})(?:\?|$)").unwrap(),
		// youtube.com/watch?v=ID&other=params
		Regex::new(r"youtube\.com/watch\?v=([a-zA-Z0-9_-]{11})&").unwrap(),
		// youtube.com/watch?other=param&v=ID
		Regex::new(r"youtube\.com/watch\?.*v=([a-zA-Z0-9_-]{11})").unwrap(),
	];
}

/// Extracts the 11 character video id from any of the recognized URL shapes.
/// Returns the capture of the first pattern that matches, or `None` when the
/// input matches none of them.
#[must_use]
pub fn extract_video_id(link: &str) -> Option<String> {
	URL_PATTERNS
		.iter()
		.find_map(|pattern| pattern.captures(link))
		.map(|captures| captures[1].to_string())
}

/// Canonical watch URL for a bare video id.
#[must_use]
pub fn watch_url(video_id: &str) -> String {
	format!("https://www.youtube.com/watch?v={video_id}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn extracts_from_every_recognized_shape() {
		let links = [
			"https://youtu.be/ZIlALB1fQVE",
			"https://youtube.com/watch?v=ZIlALB1fQVE",
			"https://youtube.com/v/ZIlALB1fQVE",
			"https://youtube.com/embed/ZIlALB1fQVE",
			"https://youtube.com/shorts/ZIlALB1fQVE",
			"https://www.youtube.com/watch?v=ZIlALB1fQVE",
			"https://m.youtube.com/watch?v=ZIlALB1fQVE",
			"https://youtu.be/ZIlALB1fQVE?t=42",
			"https://youtube.com/watch?v=ZIlALB1fQVE&list=PL123",
			"https://youtube.com/watch?list=PL123&v=ZIlALB1fQVE",
		];

		for link in links {
			assert_eq!(extract_video_id(link).as_deref(), Some("ZIlALB1fQVE"), "failed on {link}");
		}
	}

	#[test]
	fn rejects_unrecognized_input() {
		assert_eq!(extract_video_id("not a link"), None);
		assert_eq!(extract_video_id("https://vimeo.com/123456789"), None);
		assert_eq!(extract_video_id("https://youtu.be/short"), None);
		assert_eq!(extract_video_id(""), None);
	}

	#[test]
	fn first_matching_pattern_wins() {
		// Both shapes are present; the short-link pattern is tried first.
		let link = "https://youtu.be/AAAAAAAAAAA via https://youtube.com/watch?v=BBBBBBBBBBB";
		assert_eq!(extract_video_id(link).as_deref(), Some("AAAAAAAAAAA"));
	}

	#[test]
	fn id_shorter_than_eleven_chars_never_matches_partially() {
		// A 10 character id must not borrow a character from the query string.
		assert_eq!(extract_video_id("https://youtu.be/ABCDEFGHIJ"), None);
	}

	#[test]
	fn watch_url_builds_the_canonical_form() {
		assert_eq!(watch_url("ZIlALB1fQVE"), "https://www.youtube.com/watch?v=ZIlALB1fQVE");
	}
}
