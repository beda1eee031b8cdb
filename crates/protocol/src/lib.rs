//! Shared data types for the bee judge client.
//!
//! Wire-level representations of browser cookies as exchanged with a
//! headless-browser driver and persisted to per-user session files, plus
//! the option flags threaded through cached-resource fetches.

pub mod cookie;
pub mod options;

pub use cookie::{Cookie, CookieRecordSet, SameSite};
pub use options::FetchOptions;
