//! Addresses of the judge website pages the client drives.

/// Site base URL.
pub const BASE: &str = "https://www.bee-judge.net";

/// Login page, also the landing page for restored sessions.
pub fn login() -> String {
	format!("{BASE}/login")
}

/// Problem view page for a canonical problem id.
///
/// Sign-out has no address of its own: the site exposes it as an in-page
/// form (`form_logout`) submitted by the session driver.
pub fn problem_view(id: &str) -> String {
	format!("{BASE}/judge/problems/view/{id}")
}
