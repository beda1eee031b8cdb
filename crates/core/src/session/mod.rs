//! Authenticated-session lifecycle against the judge website.
//!
//! The site exposes no login API; authentication happens by driving its
//! HTML login form in a headless browser. [`Session::connect`] restores a
//! previously saved cookie set, checks the signed-in marker, submits
//! credentials when needed, and extracts the session token for subsequent
//! plain-HTTP requests. [`Session::destroy`] mirrors the flow for logout.

pub mod driver;

use std::sync::Arc;

use tracing::{debug, info, warn};

use self::driver::{BrowserDriver, DriverFactory};
use crate::adapter::HttpAdapter;
use crate::cookie_store::CookieStore;
use crate::error::{BeeError, Result};
use crate::routes;

/// Name of the cookie identifying a server-side session.
pub const SESSION_COOKIE: &str = "REVEL_SESSION";

const USERNAME_FIELD: &str = r#"input[name="username"]"#;
const PASSWORD_FIELD: &str = r#"input[name="password"]"#;
const SUBMIT_BUTTON: &str = r#"button[type="submit"]"#;
const LOGOUT_LINK: &str = "a[href*=logout]";
const LOGOUT_FORM: &str = "form_logout";

/// One authenticated identity's connection to the site.
///
/// Created empty at client construction; populated by
/// [`connect`](Session::connect); cleared by [`destroy`](Session::destroy).
/// Exactly one session exists per client instance.
pub struct Session {
	id: Option<String>,
	store: CookieStore,
	adapter: Arc<HttpAdapter>,
	factory: Arc<dyn DriverFactory>,
}

impl Session {
	pub fn new(store: CookieStore, adapter: Arc<HttpAdapter>, factory: Arc<dyn DriverFactory>) -> Self {
		Self {
			id: None,
			store,
			adapter,
			factory,
		}
	}

	/// Session token, or `None` while unauthenticated.
	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	pub fn is_connected(&self) -> bool {
		self.id.is_some()
	}

	/// Establishes an authenticated session for `username`.
	///
	/// Restores cached cookies, drives the login form when the restored
	/// state is not signed in, persists the fresh cookie set (best-effort)
	/// and stores the extracted token. On any authentication error the
	/// token stays unset.
	///
	/// Navigation waits are unbounded; callers wanting bounded latency
	/// must wrap the call with their own deadline.
	pub async fn connect(&mut self, username: &str, password: &str) -> Result<()> {
		let driver = self.factory.launch().await?;
		let result = self.connect_flow(driver.as_ref(), username, password).await;
		if let Err(e) = driver.close().await {
			warn!(user = username, error = %e, "browser close failed");
		}

		let token = result?;
		info!(user = username, "the connection is valid");

		self.adapter.set_session_token(&token);
		self.id = Some(token);
		Ok(())
	}

	async fn connect_flow(
		&self,
		driver: &dyn BrowserDriver,
		username: &str,
		password: &str,
	) -> Result<String> {
		self.restore(driver, username).await?;

		if !self.is_signed_in(driver).await? {
			self.sign_in(driver, username, password).await?;
		}
		driver.close_extra_pages().await?;

		if !self.is_signed_in(driver).await? {
			return Err(BeeError::missing_access(username));
		}

		let cookies = driver.cookies().await?;
		// Best-effort persistence: an unwritable cache dir must not cost
		// the caller a token that is still usable in-memory.
		if let Err(e) = self.store.save(username, &cookies) {
			warn!(user = username, error = %e, "failed to persist session cookies");
		} else {
			info!(user = username, "the session has been saved");
		}

		cookies
			.find(SESSION_COOKIE)
			.map(|c| c.value.clone())
			.ok_or_else(|| BeeError::missing_access(username))
	}

	async fn sign_in(&self, driver: &dyn BrowserDriver, username: &str, password: &str) -> Result<()> {
		let submit = async {
			driver.fill(USERNAME_FIELD, username).await?;
			driver.fill(PASSWORD_FIELD, password).await?;
			driver.submit(SUBMIT_BUTTON).await
		};
		match submit.await {
			Ok(()) => {
				info!(user = username, "signed in successfully");
				Ok(())
			}
			Err(e) => {
				warn!(user = username, error = %e, "connection error");
				Err(BeeError::login_rejected(username))
			}
		}
	}

	/// Tears down the authenticated session for `username`.
	///
	/// Restores the saved session, submits the logout form when signed in,
	/// overwrites the cookie file with an empty set, and clears the token.
	pub async fn destroy(&mut self, username: &str) -> Result<()> {
		let driver = self.factory.launch().await?;
		let result = self.destroy_flow(driver.as_ref(), username).await;
		if let Err(e) = driver.close().await {
			warn!(user = username, error = %e, "browser close failed");
		}
		result?;

		if let Err(e) = self.store.clear(username) {
			warn!(user = username, error = %e, "failed to clear session cookies");
		}
		self.adapter.clear_session_token();
		self.id = None;

		info!(user = username, "the session has been destroyed");
		Ok(())
	}

	async fn destroy_flow(&self, driver: &dyn BrowserDriver, username: &str) -> Result<()> {
		self.restore(driver, username).await?;

		if self.is_signed_in(driver).await? {
			if let Err(e) = driver.eval_submit(LOGOUT_FORM).await {
				warn!(user = username, error = %e, "connection error");
				return Err(BeeError::logout_rejected(username));
			}
		}
		driver.close_extra_pages().await?;
		Ok(())
	}

	/// Restores any cached cookies into the context and lands on the
	/// login page.
	async fn restore(&self, driver: &dyn BrowserDriver, username: &str) -> Result<()> {
		let cookies = self.store.load(username)?;
		if cookies.is_empty() {
			info!(user = username, "no cached session");
		} else {
			driver.set_cookies(&cookies).await?;
			info!(user = username, count = cookies.len(), "cached session loaded");
		}

		driver.close_extra_pages().await?;

		let login = routes::login();
		if driver.current_url() != login {
			driver.navigate(&login).await?;
		}
		Ok(())
	}

	/// Signed-in means both markers hold: a logout link on the page and a
	/// session-identifying cookie in the context.
	async fn is_signed_in(&self, driver: &dyn BrowserDriver) -> Result<bool> {
		let cookies = driver.cookies().await?;
		let has_session_cookie = cookies.find(SESSION_COOKIE).is_some();
		let has_logout_link = driver.has_element(LOGOUT_LINK).await?;
		debug!(has_logout_link, has_session_cookie, "sign-in check");
		Ok(has_logout_link && has_session_cookie)
	}
}
