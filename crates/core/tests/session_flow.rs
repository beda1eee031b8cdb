//! Session lifecycle tests over the mock driver.
//!
//! Exercises the connect/destroy state machine end to end: cookie
//! restoration, sign-in detection, credential submission, token
//! extraction, and the single-active-page invariant.

use std::sync::Arc;

use bee::testing::MockSite;
use bee::{
	AdapterConfig, BeeError, Cookie, CookieRecordSet, CookieStore, HttpAdapter, SESSION_COOKIE,
	Session,
};
use tempfile::TempDir;

fn session_with(site: &MockSite) -> (TempDir, Arc<HttpAdapter>, Session) {
	let dir = TempDir::new().unwrap();
	let adapter = Arc::new(HttpAdapter::new(AdapterConfig::default()).unwrap());
	let store = CookieStore::new(dir.path());
	let session = Session::new(store, Arc::clone(&adapter), Arc::new(site.clone()));
	(dir, adapter, session)
}

#[tokio::test]
async fn connect_signs_in_and_extracts_token() {
	let site = MockSite::new();
	site.grant_token("tok123");
	let (dir, adapter, mut session) = session_with(&site);

	session.connect("alice", "pw").await.unwrap();

	assert_eq!(session.id(), Some("tok123"));
	assert!(session.is_connected());
	assert_eq!(adapter.cookie_header(), "REVEL_SESSION=tok123;");

	// credentials went through the form
	let fills = site.fills();
	assert_eq!(fills.len(), 2);
	assert_eq!(fills[0].1, "alice");
	assert_eq!(fills[1].1, "pw");

	// the full cookie set was persisted for the lower-cased username
	let saved = CookieRecordSet::from_file(dir.path().join("alice.json")).unwrap();
	assert_eq!(saved.len(), 1);
	let cookie = saved.find(SESSION_COOKIE).unwrap();
	assert_eq!(cookie.value, "tok123");
}

#[tokio::test]
async fn connect_with_cached_session_skips_login_form() {
	let site = MockSite::new();
	site.seed_server_session("tok9");
	let (dir, _adapter, mut session) = session_with(&site);

	let cached =
		CookieRecordSet::from(vec![Cookie::from_url(SESSION_COOKIE, "tok9", bee::routes::login())]);
	CookieStore::new(dir.path()).save("alice", &cached).unwrap();

	session.connect("alice", "pw").await.unwrap();

	assert_eq!(session.id(), Some("tok9"));
	assert!(site.fills().is_empty(), "restored session must not re-submit credentials");
}

#[tokio::test]
async fn connect_failure_when_submit_errors() {
	let site = MockSite::new();
	site.fail_submit();
	let (_dir, adapter, mut session) = session_with(&site);

	let err = session.connect("alice", "pw").await.unwrap_err();
	assert!(matches!(err, BeeError::LoginRejected { ref username } if username == "alice"));
	assert_eq!(session.id(), None);
	assert_eq!(adapter.cookie_header(), "");
}

#[tokio::test]
async fn connect_failure_when_server_session_never_materializes() {
	// submit succeeds but the server grants nothing
	let site = MockSite::new();
	let (_dir, _adapter, mut session) = session_with(&site);

	let err = session.connect("alice", "pw").await.unwrap_err();
	assert!(matches!(err, BeeError::MissingAccess { ref username } if username == "alice"));
	assert_eq!(session.id(), None);
}

#[tokio::test]
async fn malformed_cookie_file_fails_connect_with_parse_error() {
	let site = MockSite::new();
	site.grant_token("tok123");
	let (dir, _adapter, mut session) = session_with(&site);

	std::fs::write(dir.path().join("alice.json"), "{corrupt").unwrap();

	let err = session.connect("alice", "pw").await.unwrap_err();
	assert!(matches!(err, BeeError::Parse { .. }));
}

#[tokio::test]
async fn cookie_write_failure_does_not_abort_connect() {
	let site = MockSite::new();
	site.grant_token("tok123");

	// point the store inside a plain file so directory creation fails
	let dir = TempDir::new().unwrap();
	let blocker = dir.path().join("not-a-dir");
	std::fs::write(&blocker, "x").unwrap();

	let adapter = Arc::new(HttpAdapter::new(AdapterConfig::default()).unwrap());
	let store = CookieStore::new(blocker.join("cookies"));
	let mut session = Session::new(store, adapter, Arc::new(site.clone()));

	session.connect("alice", "pw").await.unwrap();
	assert_eq!(session.id(), Some("tok123"));
}

#[tokio::test]
async fn destroy_clears_token_cookies_and_server_session() {
	let site = MockSite::new();
	site.grant_token("tok123");
	let (dir, adapter, mut session) = session_with(&site);

	session.connect("alice", "pw").await.unwrap();
	session.destroy("alice").await.unwrap();

	assert_eq!(session.id(), None);
	assert_eq!(adapter.cookie_header(), "");
	assert_eq!(site.server_session(), None);

	let file = std::fs::read_to_string(dir.path().join("alice.json")).unwrap();
	assert_eq!(file.trim(), "[]");
}

#[tokio::test]
async fn connect_after_destroy_starts_signed_out() {
	let site = MockSite::new();
	site.grant_token("tok123");
	let (_dir, _adapter, mut session) = session_with(&site);

	session.connect("alice", "pw").await.unwrap();
	assert_eq!(site.fills().len(), 2);

	session.destroy("alice").await.unwrap();
	session.connect("alice", "pw").await.unwrap();

	// the second connect found no session and went through the form again
	assert_eq!(site.fills().len(), 4);
	assert_eq!(session.id(), Some("tok123"));
}

#[tokio::test]
async fn destroy_failure_when_logout_form_errors() {
	let site = MockSite::new();
	site.grant_token("tok123");
	let (dir, _adapter, mut session) = session_with(&site);

	session.connect("alice", "pw").await.unwrap();
	site.fail_logout();

	let err = session.destroy("alice").await.unwrap_err();
	assert!(matches!(err, BeeError::LogoutRejected { ref username } if username == "alice"));

	// the aborted destroy left the session intact
	assert_eq!(session.id(), Some("tok123"));
	let saved = CookieRecordSet::from_file(dir.path().join("alice.json")).unwrap();
	assert!(!saved.is_empty());
}

#[tokio::test]
async fn popups_are_closed_before_flow_ends() {
	let site = MockSite::new();
	site.grant_token("tok123");
	site.popups_on_submit(2);
	let (_dir, _adapter, mut session) = session_with(&site);

	session.connect("alice", "pw").await.unwrap();

	assert_eq!(site.page_count(), 1, "flow must end controlling exactly one page");
}

#[tokio::test]
async fn destroy_without_prior_session_is_a_no_op_logout() {
	let site = MockSite::new();
	let (dir, _adapter, mut session) = session_with(&site);

	session.destroy("alice").await.unwrap();

	assert_eq!(session.id(), None);
	let file = std::fs::read_to_string(dir.path().join("alice.json")).unwrap();
	assert_eq!(file.trim(), "[]");
}
