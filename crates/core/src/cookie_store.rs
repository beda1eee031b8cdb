//! Filesystem-backed persistence of per-user session cookies.
//!
//! One JSON file per lower-cased username, containing either `[]` or an
//! array of cookie objects as produced by the browser's cookie API. No
//! cross-process locking: a single writer per username is assumed, and
//! concurrent connects from independent processes can race on the file.

use std::fs;
use std::path::{Path, PathBuf};

use bee_protocol::CookieRecordSet;
use tracing::debug;

use crate::error::{BeeError, Result};

/// Durable store of cookie record sets, keyed by normalized username.
#[derive(Debug, Clone)]
pub struct CookieStore {
	dir: PathBuf,
}

impl CookieStore {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	/// Default cache directory (`$XDG_CACHE_HOME/bee/cookies`).
	pub fn default_dir() -> PathBuf {
		let cache_home = std::env::var_os("XDG_CACHE_HOME")
			.map(PathBuf::from)
			.or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".cache")))
			.unwrap_or_else(|| PathBuf::from("."));
		cache_home.join("bee/cookies")
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}

	/// File path for a username, lower-cased for a deterministic key.
	pub fn path_for(&self, username: &str) -> PathBuf {
		self.dir.join(format!("{}.json", username.to_lowercase()))
	}

	/// Loads the record set for a user.
	///
	/// An absent file means no prior session and yields an empty set; a
	/// present but malformed file fails with [`BeeError::Parse`].
	pub fn load(&self, username: &str) -> Result<CookieRecordSet> {
		let path = self.path_for(username);
		if !path.exists() {
			debug!(user = username, "no cached session file");
			return Ok(CookieRecordSet::new());
		}

		let content = fs::read_to_string(&path)?;
		serde_json::from_str(&content).map_err(|source| BeeError::Parse { path, source })
	}

	/// Serializes and overwrites the user's cookie file.
	pub fn save(&self, username: &str, cookies: &CookieRecordSet) -> Result<()> {
		let path = self.path_for(username);
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent)?;
		}
		fs::write(&path, serde_json::to_string_pretty(cookies)?)?;
		debug!(user = username, count = cookies.len(), "session cookies saved");
		Ok(())
	}

	/// Overwrites the user's cookie file with an empty set.
	pub fn clear(&self, username: &str) -> Result<()> {
		self.save(username, &CookieRecordSet::new())
	}
}
