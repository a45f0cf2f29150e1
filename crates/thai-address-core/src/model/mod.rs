// crates/thai-address-core/src/model/mod.rs
pub mod convert;
pub mod flat;
pub mod hit;
pub mod raw;
pub mod search;

pub use flat::{AddressDb, District, Province, SubDistrict, SubDistrictContext};
pub use hit::{AddressHit, HitField, HitKey, PLACEHOLDER};
pub use search::SearchParams;

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.bin";
