//! Owning aggregate tying the session, adapter, and cookie store together.

use std::path::PathBuf;
use std::sync::Arc;

use crate::adapter::{AdapterConfig, HttpAdapter};
use crate::cookie_store::CookieStore;
use crate::error::Result;
use crate::managers::samples::SampleManager;
use crate::providers::{ExistenceScraper, RawDataProvider};
use crate::resolver::ProblemHandle;
use crate::session::Session;
use crate::session::driver::DriverFactory;
use crate::structures::sample::RawSampleData;

/// Configuration for [`Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
	/// Directory holding per-user cookie files.
	pub cookie_dir: PathBuf,
	pub adapter: AdapterConfig,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			cookie_dir: CookieStore::default_dir(),
			adapter: AdapterConfig::default(),
		}
	}
}

/// Client for the judge website.
pub struct Client {
	username: Option<String>,
	adapter: Arc<HttpAdapter>,
	session: Session,
}

impl Client {
	pub fn new(factory: Arc<dyn DriverFactory>) -> Result<Self> {
		Self::with_config(ClientConfig::default(), factory)
	}

	pub fn with_config(config: ClientConfig, factory: Arc<dyn DriverFactory>) -> Result<Self> {
		let adapter = Arc::new(HttpAdapter::new(config.adapter)?);
		let store = CookieStore::new(config.cookie_dir);
		let session = Session::new(store, Arc::clone(&adapter), factory);

		Ok(Self {
			username: None,
			adapter,
			session,
		})
	}

	/// Username of the signed-in user, if any.
	pub fn username(&self) -> Option<&str> {
		self.username.as_deref()
	}

	pub fn session(&self) -> &Session {
		&self.session
	}

	/// Shared HTTP adapter carrying the session token after login.
	pub fn adapter(&self) -> Arc<HttpAdapter> {
		Arc::clone(&self.adapter)
	}

	/// Signs in and remembers the username for a later [`logout`](Client::logout).
	pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
		self.session.connect(username, password).await?;
		self.username = Some(username.to_string());
		Ok(())
	}

	/// Signs out the remembered user.
	pub async fn logout(&mut self) -> Result<()> {
		let username = self.username.clone().unwrap_or_default();
		self.session.destroy(&username).await?;
		self.username = None;
		Ok(())
	}

	/// Builds a sample manager scoped to `problem`.
	pub fn samples(
		&self,
		problem: ProblemHandle,
		provider: Arc<dyn RawDataProvider<Raw = RawSampleData>>,
		scraper: Arc<dyn ExistenceScraper>,
	) -> SampleManager {
		SampleManager::new(problem, provider, scraper)
	}
}
