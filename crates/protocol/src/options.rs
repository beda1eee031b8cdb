//! Option flags threaded through cached-resource fetches.

use serde::{Deserialize, Serialize};

/// Options for fetching a cached resource.
///
/// Passed through to the remote data provider on a cache miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FetchOptions {
    /// Whether to insert the fetched entity into the cache
    pub cache: bool,

    /// Bypass the cache and always call the provider
    pub force: bool,

    /// Fetch all items of the resource rather than the first
    pub all: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            cache: true,
            force: false,
            all: true,
        }
    }
}

impl FetchOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the result is inserted into the cache.
    pub fn cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    /// Sets whether the provider is called even on a cache hit.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Sets whether all items are fetched.
    pub fn all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = FetchOptions::new();
        assert!(opts.cache);
        assert!(!opts.force);
        assert!(opts.all);
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let opts: FetchOptions = serde_json::from_str(r#"{"force":true}"#).unwrap();
        assert!(opts.force);
        assert!(opts.cache);
    }
}
