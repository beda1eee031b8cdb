//! Identity-keyed resource managers.
//!
//! [`cached::CachedManager`] owns the generic normalized-key map;
//! [`samples::SampleManager`] is the concrete read-through cache for
//! contest-problem samples.

pub mod cached;
pub mod samples;
