//! HTTP adapter holding default headers for authenticated requests.
//!
//! After a successful sign-in the [`Session`](crate::session::Session)
//! injects the session token here, and every subsequent request carries it
//! as a `Cookie` header.

use parking_lot::Mutex;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use url::Url;

use crate::error::{BeeError, Result};
use crate::routes;
use crate::session::SESSION_COOKIE;

/// Configuration for [`HttpAdapter`].
#[derive(Debug, Clone)]
pub struct AdapterConfig {
	/// Base URL all request paths are joined against.
	pub base_url: String,
	/// User-Agent sent with every request.
	pub user_agent: String,
}

impl Default for AdapterConfig {
	fn default() -> Self {
		Self {
			base_url: routes::BASE.to_string(),
			user_agent: format!("bee-rs/{}", env!("CARGO_PKG_VERSION")),
		}
	}
}

/// HTTP client with mutable default headers.
///
/// The `Cookie` default accumulates `name=value;` pairs the way browser
/// adapters do; [`set_session_token`](HttpAdapter::set_session_token)
/// appends the session pair, [`clear_session_token`](HttpAdapter::clear_session_token)
/// removes it.
#[derive(Debug)]
pub struct HttpAdapter {
	client: reqwest::Client,
	base_url: Url,
	cookie_header: Mutex<String>,
}

impl HttpAdapter {
	pub fn new(config: AdapterConfig) -> Result<Self> {
		let base_url = Url::parse(&config.base_url)
			.map_err(|e| BeeError::Driver(format!("invalid base url {}: {e}", config.base_url)))?;

		let mut headers = HeaderMap::new();
		headers.insert(
			USER_AGENT,
			HeaderValue::from_str(&config.user_agent)
				.unwrap_or_else(|_| HeaderValue::from_static("bee-rs")),
		);

		let client = reqwest::Client::builder().default_headers(headers).build()?;

		Ok(Self {
			client,
			base_url,
			cookie_header: Mutex::new(String::new()),
		})
	}

	/// Appends the session token to the default `Cookie` header.
	pub fn set_session_token(&self, token: &str) {
		let mut header = self.cookie_header.lock();
		header.push_str(&format!("{SESSION_COOKIE}={token};"));
	}

	/// Drops any session pair from the default `Cookie` header.
	pub fn clear_session_token(&self) {
		let prefix = format!("{SESSION_COOKIE}=");
		let mut header = self.cookie_header.lock();
		let retained: String = header
			.split_inclusive(';')
			.filter(|pair| !pair.trim_start().starts_with(&prefix))
			.collect();
		*header = retained;
	}

	/// Current default `Cookie` header value.
	pub fn cookie_header(&self) -> String {
		self.cookie_header.lock().clone()
	}

	/// Issues a GET against `path` (joined to the base URL), carrying the
	/// default `Cookie` header, and returns the response body.
	pub async fn get(&self, path: &str) -> Result<String> {
		let url = self
			.base_url
			.join(path)
			.map_err(|e| BeeError::Driver(format!("invalid request path {path}: {e}")))?;

		let mut request = self.client.get(url);
		let cookie = self.cookie_header();
		if !cookie.is_empty() {
			request = request.header(reqwest::header::COOKIE, cookie);
		}

		let response = request.send().await?.error_for_status()?;
		Ok(response.text().await?)
	}
}
