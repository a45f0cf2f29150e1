// crates/thai-address-core/src/lib.rs

//! Thai administrative address lookup.
//!
//! - [`AddressDb`]: flat in-memory dataset (provinces → districts →
//!   sub-districts with postal codes), loaded from JSON or a binary cache.
//! - [`ThaiAddressProvider`]: the [`AddressProvider`] over that dataset.
//! - [`QueryRouter`]: turns one free-text query into provider calls and a
//!   de-duplicated hit list.
//! - [`SearchSession`]: readiness tracking and last-write-wins publication
//!   for front-ends.

pub mod common;
pub mod error;
pub mod loader; // I/O + caches
pub mod model;
pub mod prelude;
pub mod provider;
pub mod router; // query classification + merge
pub mod session;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{DbStats, Locale};
pub use crate::error::{AddressError, Result, SearchError};
pub use crate::model::{AddressDb, AddressHit, District, HitField, Province, SearchParams, SubDistrict};
pub use crate::provider::{DataSource, ProviderConfig, ProviderConfigBuilder, ThaiAddressProvider};
pub use crate::router::{deduplicate, QueryKind, QueryRouter, RouterConfig, DEFAULT_AUTOCOMPLETE_LIMIT};
pub use crate::session::{SearchSession, SearchStatus, SearchView};
// Traits must be in scope for the lookup methods
pub use crate::traits::{AddressProvider, AddressSearch, NameMatch};
