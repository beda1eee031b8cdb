//! Cookie types for session persistence.
//!
//! These types represent browser cookies that are captured after a
//! successful sign-in and restored into a fresh browser context on the
//! next run, so authentication survives across process restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// SameSite cookie attribute.
///
/// Controls when cookies are sent with cross-site requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SameSite {
    /// Cookie is sent with same-site and cross-site requests
    #[serde(rename = "None")]
    None,
    /// Cookie is sent with same-site requests and cross-site top-level navigations
    #[default]
    #[serde(rename = "Lax")]
    Lax,
    /// Cookie is only sent with same-site requests
    #[serde(rename = "Strict")]
    Strict,
}

/// A browser cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    /// Cookie name
    pub name: String,

    /// Cookie value
    pub value: String,

    /// Domain for the cookie
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Path for the cookie
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Unix timestamp in seconds (-1 means session cookie)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<f64>,

    /// Whether the cookie is HTTP-only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_only: Option<bool>,

    /// Whether the cookie requires HTTPS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,

    /// SameSite attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub same_site: Option<SameSite>,

    /// URL to infer domain and path from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Cookie {
    /// Creates a new cookie with required fields.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: Some(domain.into()),
            path: None,
            expires: None,
            http_only: None,
            secure: None,
            same_site: None,
            url: None,
        }
    }

    /// Creates a new cookie from a URL (domain and path inferred).
    pub fn from_url(
        name: impl Into<String>,
        value: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: None,
            path: None,
            expires: None,
            http_only: None,
            secure: None,
            same_site: None,
            url: Some(url.into()),
        }
    }

    /// Sets the path for the cookie.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets whether the cookie is HTTP-only.
    pub fn http_only(mut self, http_only: bool) -> Self {
        self.http_only = Some(http_only);
        self
    }

    /// Sets the SameSite attribute.
    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }
}

/// An ordered set of cookies for one user, as captured from a browser
/// context after sign-in.
///
/// Serializes to a plain JSON array so the at-rest file is either `[]`
/// or an array of cookie objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CookieRecordSet {
    cookies: Vec<Cookie>,
}

impl CookieRecordSet {
    /// Creates an empty record set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cookie> {
        self.cookies.iter()
    }

    /// Appends a cookie to the set.
    pub fn push(&mut self, cookie: Cookie) {
        self.cookies.push(cookie);
    }

    /// Finds a cookie by name.
    pub fn find(&self, name: &str) -> Option<&Cookie> {
        self.cookies.iter().find(|c| c.name == name)
    }

    /// Loads a record set from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Saves the record set to a JSON file.
    pub fn to_file(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}

impl From<Vec<Cookie>> for CookieRecordSet {
    fn from(cookies: Vec<Cookie>) -> Self {
        Self { cookies }
    }
}

impl IntoIterator for CookieRecordSet {
    type Item = Cookie;
    type IntoIter = std::vec::IntoIter<Cookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.into_iter()
    }
}

impl<'a> IntoIterator for &'a CookieRecordSet {
    type Item = &'a Cookie;
    type IntoIter = std::slice::Iter<'a, Cookie>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_serialization() {
        let cookie = Cookie::new("REVEL_SESSION", "abc", ".judge.example.com")
            .http_only(true)
            .same_site(SameSite::Lax);

        let json = serde_json::to_string(&cookie).unwrap();
        assert!(json.contains("\"name\":\"REVEL_SESSION\""));
        assert!(json.contains("\"httpOnly\":true"));
        assert!(json.contains("\"sameSite\":\"Lax\""));
    }

    #[test]
    fn test_url_scoped_cookie() {
        let cookie = Cookie::from_url("REVEL_SESSION", "tok123", "https://judge.example/login");

        let json = serde_json::to_string(&cookie).unwrap();
        assert!(json.contains("\"url\":\"https://judge.example/login\""));
        assert!(!json.contains("\"domain\""));
    }

    #[test]
    fn test_record_set_is_plain_array() {
        let set = CookieRecordSet::from(vec![Cookie::new("a", "1", ".x.com")]);
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.starts_with('['));

        let empty = CookieRecordSet::new();
        assert_eq!(serde_json::to_string(&empty).unwrap(), "[]");
    }

    #[test]
    fn test_record_set_find() {
        let set = CookieRecordSet::from(vec![
            Cookie::new("other", "x", ".x.com"),
            Cookie::new("REVEL_SESSION", "tok123", ".x.com"),
        ]);
        assert_eq!(set.find("REVEL_SESSION").unwrap().value, "tok123");
        assert!(set.find("missing").is_none());
    }

    #[test]
    fn test_record_set_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alice.json");

        let set = CookieRecordSet::from(vec![
            Cookie::new("REVEL_SESSION", "tok123", ".x.com").path("/"),
        ]);
        set.to_file(&path).unwrap();

        let restored = CookieRecordSet::from_file(&path).unwrap();
        assert_eq!(restored, set);
    }

    #[test]
    fn test_malformed_file_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = CookieRecordSet::from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
