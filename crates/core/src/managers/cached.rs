//! Generic owner of an identity-keyed entity cache.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// Normalizes a raw identifier into its canonical cache key.
///
/// Keys are case-insensitive; callers normalize at the boundary before any
/// lookup or insertion, never inside storage.
pub fn normalize(id: &str) -> String {
	id.to_lowercase()
}

/// Map from normalized identifier to hydrated entity.
///
/// At most one entry exists per normalized identifier; insertion
/// overwrites, so overlapping forced fetches resolve last-writer-wins.
/// Entities are shared out as [`Arc`]s so repeated lookups return the
/// identical instance.
#[derive(Debug, Default)]
pub struct CachedManager<E> {
	cache: Mutex<HashMap<String, Arc<E>>>,
}

impl<E> CachedManager<E> {
	pub fn new() -> Self {
		Self {
			cache: Mutex::new(HashMap::new()),
		}
	}

	/// Looks up a normalized identifier.
	pub fn get(&self, id: &str) -> Option<Arc<E>> {
		self.cache.lock().get(id).cloned()
	}

	/// Inserts an entity under a normalized identifier, replacing any
	/// prior entry, and returns the shared handle.
	pub fn insert(&self, id: impl Into<String>, entity: E) -> Arc<E> {
		let entity = Arc::new(entity);
		self.cache.lock().insert(id.into(), Arc::clone(&entity));
		entity
	}

	pub fn len(&self) -> usize {
		self.cache.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.cache.lock().is_empty()
	}
}
