//! Collaborator traits for remote data retrieval.
//!
//! Concrete scraping logic (HTML selectors, page parsing) lives outside
//! this crate; the managers only depend on these seams. A provider may
//! itself perform authenticated HTTP requests through the shared
//! [`HttpAdapter`](crate::adapter::HttpAdapter).

use async_trait::async_trait;
use bee_protocol::FetchOptions;

use crate::error::Result;

/// Fetches raw data for a resolved identifier.
#[async_trait]
pub trait RawDataProvider: Send + Sync {
	type Raw;

	async fn from_id(&self, id: &str, options: &FetchOptions) -> Result<Self::Raw>;
}

/// Answers whether the resource exists in its owning context, without
/// fetching it.
#[async_trait]
pub trait ExistenceScraper: Send + Sync {
	async fn exists(&self) -> Result<bool>;
}
