//! Contest-problem sample entities.

use serde::{Deserialize, Serialize};

use crate::resolver::ProblemHandle;

/// One input/output sample pair as shown on a problem page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleCase {
	pub input: String,
	pub output: String,
}

/// Raw sample data as returned by a provider, before hydration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSampleData {
	pub cases: Vec<SampleCase>,
}

/// Hydrated sample collection for one problem.
///
/// Constructed from raw provider data plus the owning problem supplied as
/// contextual extras at insertion time; owned by the cache once inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestProblemSample {
	/// Canonical id of the owning problem.
	pub problem_id: String,
	pub cases: Vec<SampleCase>,
}

impl ContestProblemSample {
	pub fn new(raw: RawSampleData, problem: &ProblemHandle) -> Self {
		Self {
			problem_id: problem.id.clone(),
			cases: raw.cases,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.cases.is_empty()
	}

	pub fn len(&self) -> usize {
		self.cases.len()
	}
}
