//! Workspace umbrella crate: re-exports `thai-address-core` for the demos.

pub use thai_address_core::*;
