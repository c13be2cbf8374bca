use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, COOKIE, ORIGIN, REFERER, USER_AGENT};

/// User agent presented to both conversion services.
pub const BROWSER_USER_AGENT: &str =
	"Mozilla/5.0 (Linux; Android 11; F1 Prime 4G Build/RP1A.201005.001) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/140.0.7339.207 Mobile Safari/537.36";

/// Header set shared by every request to the conversion services. The services
/// only answer clients that look like a mobile browser, so the client hints and
/// fetch metadata have to come along for the ride.
///
/// Accept-Encoding is deliberately absent: reqwest's compression features
/// advertise it and transparently decode the response body. Inserting it here
/// would disable that decoding.
#[must_use]
pub fn browser_headers() -> HeaderMap {
	let mut headers = HeaderMap::new();
	headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
	headers.insert("sec-ch-ua-platform", HeaderValue::from_static("\"Android\""));
	headers.insert(
		"sec-ch-ua",
		HeaderValue::from_static("\"Chromium\";v=\"140\", \"Not=A?Brand\";v=\"24\", \"Android WebView\";v=\"140\""),
	);
	headers.insert("sec-ch-ua-mobile", HeaderValue::from_static("?1"));
	headers.insert("x-requested-with", HeaderValue::from_static("mark.via.gp"));
	headers.insert("sec-fetch-site", HeaderValue::from_static("cross-site"));
	headers.insert("sec-fetch-mode", HeaderValue::from_static("cors"));
	headers.insert("sec-fetch-dest", HeaderValue::from_static("empty"));
	headers.insert(
		ACCEPT_LANGUAGE,
		HeaderValue::from_static("fr-FR,fr;q=0.9,en-AS;q=0.8,en-MG;q=0.7,en-US;q=0.6,en;q=0.5"),
	);
	headers.insert("priority", HeaderValue::from_static("u=1, i"));
	headers
}

/// Headers for the poll-based service, including the loader session cookie it
/// expects on both the submission and every progress call.
#[must_use]
pub fn savenow_headers() -> HeaderMap {
	let mut headers = browser_headers();
	headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
	headers.insert(REFERER, HeaderValue::from_static("https://sombynyaina.gleeze.com/"));
	headers.insert(COOKIE, HeaderValue::from_static("loader_session=3aHQXwrv3i1iplIgTl30xFnTuTnPKoWKi2CZdbFF"));
	headers
}

/// Headers for the synchronous converter, which checks the request origin.
#[must_use]
pub fn flvto_headers() -> HeaderMap {
	let mut headers = browser_headers();
	headers.insert(ORIGIN, HeaderValue::from_static("https://flvto.site"));
	headers.insert(REFERER, HeaderValue::from_static("https://flvto.site/"));
	headers
}
