//! Read-through cache of contest-problem samples.

use std::sync::Arc;

use bee_protocol::FetchOptions;
use tracing::debug;

use super::cached::{CachedManager, normalize};
use crate::error::{BeeError, Result};
use crate::providers::{ExistenceScraper, RawDataProvider};
use crate::resolver::{ProblemHandle, ProblemRef};
use crate::structures::sample::{ContestProblemSample, RawSampleData};

/// Manager of sample collections for one owning problem.
///
/// On a cache miss it delegates to the provider for raw data, hydrates an
/// entity with the owning problem as contextual extras, and caches it
/// under the normalized identifier.
pub struct SampleManager {
	problem: ProblemHandle,
	cache: CachedManager<ContestProblemSample>,
	provider: Arc<dyn RawDataProvider<Raw = RawSampleData>>,
	scraper: Arc<dyn ExistenceScraper>,
}

impl SampleManager {
	pub fn new(
		problem: ProblemHandle,
		provider: Arc<dyn RawDataProvider<Raw = RawSampleData>>,
		scraper: Arc<dyn ExistenceScraper>,
	) -> Self {
		Self {
			problem,
			cache: CachedManager::new(),
			provider,
			scraper,
		}
	}

	/// Problem this manager is scoped to.
	pub fn problem(&self) -> &ProblemHandle {
		&self.problem
	}

	/// Number of cached entries.
	pub fn cached(&self) -> usize {
		self.cache.len()
	}

	/// Fetches the sample collection for `problem`.
	///
	/// Returns the cached entity unless `options.force` is set; otherwise
	/// calls the provider, hydrates, and (when `options.cache`) inserts the
	/// result, replacing any prior entry for that identifier. Provider
	/// errors propagate unmodified and nothing is cached on failure.
	pub async fn fetch(
		&self,
		problem: &ProblemRef,
		options: FetchOptions,
	) -> Result<Arc<ContestProblemSample>> {
		let id = problem
			.resolve_id()
			.ok_or_else(|| BeeError::Resolution(format!("unresolvable problem reference: {problem:?}")))?;
		let id = normalize(id);

		if !options.force {
			if let Some(existing) = self.cache.get(&id) {
				debug!(%id, "sample cache hit");
				return Ok(existing);
			}
		}

		debug!(%id, force = options.force, "sample cache miss, fetching");
		let raw = self.provider.from_id(&id, &options).await?;
		let entity = ContestProblemSample::new(raw, &self.problem);

		if options.cache {
			Ok(self.cache.insert(id, entity))
		} else {
			Ok(Arc::new(entity))
		}
	}

	/// Whether the resource exists, per the scraper. Never touches the
	/// cache.
	pub async fn exists(&self) -> Result<bool> {
		self.scraper.exists().await
	}
}
