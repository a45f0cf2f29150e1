//! Common types and traits, for `use thai_address_core::prelude::*;`.

pub use crate::common::{DbStats, Locale};
pub use crate::error::{AddressError, Result, SearchError};
pub use crate::model::{AddressDb, AddressHit, HitField, SearchParams};
pub use crate::provider::{DataSource, ProviderConfig, ThaiAddressProvider};
pub use crate::router::{QueryKind, QueryRouter, RouterConfig};
pub use crate::session::{SearchSession, SearchStatus, SearchView};
pub use crate::traits::{AddressProvider, AddressSearch, NameMatch};
