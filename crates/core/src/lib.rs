//! bee: client-side data-access layer for the bee-judge website.
//!
//! The site has no API; its only interface is browser-rendered HTML. This
//! crate drives a headless browser (behind the [`BrowserDriver`] capability
//! trait) through the sign-in flow, persists the resulting session cookies
//! per user, and exposes cached, identity-keyed access to resources scraped
//! from protected pages.
//!
//! # Example
//!
//! ```ignore
//! use bee::{Client, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let factory = my_driver::factory();
//!     let mut client = Client::new(factory)?;
//!
//!     client.login("alice", "secret").await?;
//!     // authenticated HTTP calls now carry the session token
//!     client.logout().await?;
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod client;
pub mod cookie_store;
pub mod error;
pub mod logging;
pub mod managers;
pub mod providers;
pub mod resolver;
pub mod routes;
pub mod session;
pub mod structures;
pub mod testing;

pub use adapter::{AdapterConfig, HttpAdapter};
pub use bee_protocol::{Cookie, CookieRecordSet, FetchOptions, SameSite};
pub use client::{Client, ClientConfig};
pub use cookie_store::CookieStore;
pub use error::{BeeError, Result};
pub use managers::cached::CachedManager;
pub use managers::samples::SampleManager;
pub use providers::{ExistenceScraper, RawDataProvider};
pub use resolver::{ProblemHandle, ProblemRef};
pub use session::driver::{BrowserDriver, DriverFactory};
pub use session::{SESSION_COOKIE, Session};
pub use structures::sample::{ContestProblemSample, RawSampleData, SampleCase};
