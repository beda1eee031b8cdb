//! Testing infrastructure for bee.
//!
//! Provides mock implementations of the collaborator traits so session and
//! manager flows can be exercised without spawning a browser or touching
//! the network:
//!
//! - [`MockSite`]: scripted site/browser state shared across launches
//! - [`MockDriver`]: [`BrowserDriver`] over a [`MockSite`]
//! - [`MockProvider`]: canned [`RawDataProvider`] with a call counter
//! - [`MockScraper`]: canned [`ExistenceScraper`]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bee_protocol::{Cookie, CookieRecordSet, FetchOptions};
use parking_lot::Mutex;

use crate::error::{BeeError, Result};
use crate::providers::{ExistenceScraper, RawDataProvider};
use crate::session::SESSION_COOKIE;
use crate::session::driver::{BrowserDriver, DriverFactory};
use crate::structures::sample::RawSampleData;

#[derive(Debug, Default)]
struct SiteState {
	// server side, persists across browser launches
	server_session: Option<String>,
	grant_token: Option<String>,
	fail_submit: bool,
	fail_logout: bool,
	popups_on_submit: usize,

	// current browser context
	url: String,
	cookies: CookieRecordSet,
	pages: usize,

	// recorded interactions
	launches: usize,
	fills: Vec<(String, String)>,
	navigations: Vec<String>,
}

/// Scripted judge site plus the browser contexts launched against it.
///
/// Server-side session state survives across driver launches; browser
/// context state (cookies, url, open pages) resets per launch, the way a
/// fresh headless context would.
#[derive(Debug, Clone, Default)]
pub struct MockSite {
	state: Arc<Mutex<SiteState>>,
}

impl MockSite {
	pub fn new() -> Self {
		Self::default()
	}

	/// A credential submit establishes a server session with this token.
	pub fn grant_token(&self, token: &str) {
		self.state.lock().grant_token = Some(token.to_string());
	}

	/// Pretend the server already holds a valid session for this token
	/// (as after a previous run whose cookies were cached).
	pub fn seed_server_session(&self, token: &str) {
		self.state.lock().server_session = Some(token.to_string());
	}

	/// Make credential submits fail (network/UI error).
	pub fn fail_submit(&self) {
		self.state.lock().fail_submit = true;
	}

	/// Make the logout form submission fail.
	pub fn fail_logout(&self) {
		self.state.lock().fail_logout = true;
	}

	/// Open this many pop-up pages whenever a submit lands.
	pub fn popups_on_submit(&self, count: usize) {
		self.state.lock().popups_on_submit = count;
	}

	pub fn launches(&self) -> usize {
		self.state.lock().launches
	}

	pub fn fills(&self) -> Vec<(String, String)> {
		self.state.lock().fills.clone()
	}

	pub fn navigations(&self) -> Vec<String> {
		self.state.lock().navigations.clone()
	}

	pub fn server_session(&self) -> Option<String> {
		self.state.lock().server_session.clone()
	}

	/// Pages open in the most recent browser context.
	pub fn page_count(&self) -> usize {
		self.state.lock().pages
	}
}

#[async_trait]
impl DriverFactory for MockSite {
	async fn launch(&self) -> Result<Box<dyn BrowserDriver>> {
		let mut state = self.state.lock();
		state.launches += 1;
		state.url = "about:blank".to_string();
		state.cookies = CookieRecordSet::new();
		state.pages = 1;
		Ok(Box::new(MockDriver {
			state: Arc::clone(&self.state),
		}))
	}
}

/// One launched mock browser context.
pub struct MockDriver {
	state: Arc<Mutex<SiteState>>,
}

impl MockDriver {
	fn signed_in(state: &SiteState) -> bool {
		match (&state.server_session, state.cookies.find(SESSION_COOKIE)) {
			(Some(session), Some(cookie)) => *session == cookie.value,
			_ => false,
		}
	}
}

#[async_trait]
impl BrowserDriver for MockDriver {
	async fn navigate(&self, url: &str) -> Result<()> {
		let mut state = self.state.lock();
		state.url = url.to_string();
		state.navigations.push(url.to_string());
		Ok(())
	}

	fn current_url(&self) -> String {
		self.state.lock().url.clone()
	}

	async fn fill(&self, selector: &str, value: &str) -> Result<()> {
		let mut state = self.state.lock();
		state.fills.push((selector.to_string(), value.to_string()));
		Ok(())
	}

	async fn submit(&self, _selector: &str) -> Result<()> {
		let mut state = self.state.lock();
		if state.fail_submit {
			return Err(BeeError::Driver("submit navigation failed".into()));
		}
		state.pages += state.popups_on_submit;
		if let Some(token) = state.grant_token.clone() {
			state.server_session = Some(token.clone());
			state.cookies.push(Cookie::new(SESSION_COOKIE, token, ".bee-judge.net"));
		}
		Ok(())
	}

	async fn eval_submit(&self, _form_name: &str) -> Result<()> {
		let mut state = self.state.lock();
		if state.fail_logout {
			return Err(BeeError::Driver("logout form failed".into()));
		}
		state.server_session = None;
		Ok(())
	}

	async fn has_element(&self, selector: &str) -> Result<bool> {
		let state = self.state.lock();
		if selector.contains("logout") {
			return Ok(Self::signed_in(&state));
		}
		Ok(false)
	}

	async fn cookies(&self) -> Result<CookieRecordSet> {
		Ok(self.state.lock().cookies.clone())
	}

	async fn set_cookies(&self, cookies: &CookieRecordSet) -> Result<()> {
		let mut state = self.state.lock();
		for cookie in cookies {
			state.cookies.push(cookie.clone());
		}
		Ok(())
	}

	fn page_count(&self) -> usize {
		self.state.lock().pages
	}

	async fn close_extra_pages(&self) -> Result<()> {
		self.state.lock().pages = 1;
		Ok(())
	}

	async fn close(&self) -> Result<()> {
		Ok(())
	}
}

/// Canned raw-data provider counting its invocations.
pub struct MockProvider {
	data: RawSampleData,
	fail: bool,
	calls: AtomicUsize,
}

impl MockProvider {
	pub fn new(data: RawSampleData) -> Self {
		Self {
			data,
			fail: false,
			calls: AtomicUsize::new(0),
		}
	}

	pub fn failing() -> Self {
		Self {
			data: RawSampleData::default(),
			fail: true,
			calls: AtomicUsize::new(0),
		}
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl RawDataProvider for MockProvider {
	type Raw = RawSampleData;

	async fn from_id(&self, _id: &str, _options: &FetchOptions) -> Result<RawSampleData> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		if self.fail {
			return Err(BeeError::Provider("scrape failed".into()));
		}
		Ok(self.data.clone())
	}
}

/// Canned existence scraper.
pub struct MockScraper {
	exists: bool,
	calls: AtomicUsize,
}

impl MockScraper {
	pub fn new(exists: bool) -> Self {
		Self {
			exists,
			calls: AtomicUsize::new(0),
		}
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl ExistenceScraper for MockScraper {
	async fn exists(&self) -> Result<bool> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		Ok(self.exists)
	}
}
