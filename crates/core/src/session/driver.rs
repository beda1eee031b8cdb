//! Capability trait for the headless-browser engine.
//!
//! The sign-in flow only needs a narrow set of page operations: navigate,
//! fill a field, submit, query a marker element, and read/apply cookies.
//! Any automation engine (or an HTTP session-replay fake in tests) can
//! drive the flow by implementing [`BrowserDriver`]; the session state
//! machine never touches a concrete engine type.

use async_trait::async_trait;
use bee_protocol::CookieRecordSet;

use crate::error::Result;

/// One launched browser context with a single controlled page.
///
/// The session owns the driver exclusively for the duration of a
/// connect/destroy flow; no concurrent operations are issued against it.
#[async_trait]
pub trait BrowserDriver: Send + Sync {
	/// Navigates the controlled page to `url` and waits for the load.
	async fn navigate(&self, url: &str) -> Result<()>;

	/// URL the controlled page is currently at.
	fn current_url(&self) -> String;

	/// Types `value` into the element matched by `selector`.
	async fn fill(&self, selector: &str, value: &str) -> Result<()>;

	/// Clicks the element matched by `selector` and waits for the
	/// resulting navigation to complete, with no internal timeout.
	async fn submit(&self, selector: &str) -> Result<()>;

	/// Submits the named form via page script (used for logout forms
	/// that have no clickable control).
	async fn eval_submit(&self, form_name: &str) -> Result<()>;

	/// Whether any element matches `selector` on the current page.
	async fn has_element(&self, selector: &str) -> Result<bool>;

	/// Cookies currently held by the browser context.
	async fn cookies(&self) -> Result<CookieRecordSet>;

	/// Applies a record set to the browser context.
	async fn set_cookies(&self, cookies: &CookieRecordSet) -> Result<()>;

	/// Number of pages currently open in the context.
	fn page_count(&self) -> usize;

	/// Closes every page except the controlled one.
	///
	/// Pop-ups opened mid-flow would otherwise leave the context with
	/// more than one page; the session calls this at each step boundary
	/// so the flow always observes exactly one page.
	async fn close_extra_pages(&self) -> Result<()>;

	/// Closes the browser context.
	async fn close(&self) -> Result<()>;
}

/// Produces a fresh [`BrowserDriver`] per connect/destroy flow.
#[async_trait]
pub trait DriverFactory: Send + Sync {
	async fn launch(&self) -> Result<Box<dyn BrowserDriver>>;
}
