//! Resolution of heterogeneous problem references to canonical ids.

/// Minimal handle to a problem a manager is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemHandle {
	pub id: String,
	pub title: Option<String>,
}

impl ProblemHandle {
	pub fn new(id: impl Into<String>) -> Self {
		Self { id: id.into(), title: None }
	}

	pub fn with_title(id: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			title: Some(title.into()),
		}
	}
}

/// Heterogeneous input accepted wherever a problem is identified: either a
/// raw identifier string or an already-hydrated handle.
#[derive(Debug, Clone)]
pub enum ProblemRef {
	Id(String),
	Handle(ProblemHandle),
}

impl ProblemRef {
	/// Canonical identifier for this reference, if one can be derived.
	///
	/// Empty identifiers resolve to `None`; case normalization happens at
	/// the cache boundary, not here.
	pub fn resolve_id(&self) -> Option<&str> {
		let id = match self {
			ProblemRef::Id(id) => id.as_str(),
			ProblemRef::Handle(handle) => handle.id.as_str(),
		};
		if id.trim().is_empty() { None } else { Some(id) }
	}
}

impl From<&str> for ProblemRef {
	fn from(id: &str) -> Self {
		ProblemRef::Id(id.to_string())
	}
}

impl From<String> for ProblemRef {
	fn from(id: String) -> Self {
		ProblemRef::Id(id)
	}
}

impl From<ProblemHandle> for ProblemRef {
	fn from(handle: ProblemHandle) -> Self {
		ProblemRef::Handle(handle)
	}
}
