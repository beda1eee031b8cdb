use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BeeError>;

#[derive(Debug, Error)]
pub enum BeeError {
	/// Credential form submission or the following navigation failed outright.
	#[error("login rejected for user: {username}")]
	LoginRejected { username: String },

	/// Credentials were submitted without error, but the server never
	/// established an authenticated session.
	#[error("missing access for user: {username}")]
	MissingAccess { username: String },

	/// The logout action failed to execute or navigate.
	#[error("logout rejected for user: {username}")]
	LogoutRejected { username: String },

	/// A caller-supplied identifier could not be resolved to a canonical id.
	#[error("identifier resolution failed: {0}")]
	Resolution(String),

	/// A cookie file exists but does not hold valid serialized cookie data.
	#[error("cookie file is malformed: {}", path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// The browser driver reported a capability failure.
	#[error("browser driver failed: {0}")]
	Driver(String),

	/// The remote data provider failed to produce raw data.
	#[error("provider fetch failed: {0}")]
	Provider(String),

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Http(#[from] reqwest::Error),

	#[error(transparent)]
	Anyhow(#[from] anyhow::Error),
}

impl BeeError {
	pub fn login_rejected(username: impl Into<String>) -> Self {
		BeeError::LoginRejected { username: username.into() }
	}

	pub fn missing_access(username: impl Into<String>) -> Self {
		BeeError::MissingAccess { username: username.into() }
	}

	pub fn logout_rejected(username: impl Into<String>) -> Self {
		BeeError::LogoutRejected { username: username.into() }
	}

	/// True for errors raised by the authentication state machine.
	pub fn is_auth_error(&self) -> bool {
		matches!(
			self,
			BeeError::LoginRejected { .. } | BeeError::MissingAccess { .. } | BeeError::LogoutRejected { .. }
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn auth_errors_carry_username() {
		let err = BeeError::missing_access("alice");
		assert_eq!(err.to_string(), "missing access for user: alice");
		assert!(err.is_auth_error());
	}

	#[test]
	fn io_error_is_not_auth_error() {
		let err = BeeError::from(std::io::Error::other("boom"));
		assert!(!err.is_auth_error());
	}
}
