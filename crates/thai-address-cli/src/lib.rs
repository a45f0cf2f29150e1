//! thai-address-cli
//! ================
//!
//! Command-line interface for the `thai-address-core` Thai address database.
//!
//! This crate primarily provides a binary (`thai-address`). The library target
//! exists so that docs.rs renders this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install thai-address-cli
//! thai-address --help
//! thai-address stats
//! thai-address search 10330
//! thai-address --locale en search บางรัก
//! thai-address interactive
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (default `warn`).
//!
//! For programmatic access use the [`thai-address-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/amiearth/thai-address-rs>
//! - Core crate: <https://docs.rs/thai-address-core>
#![cfg_attr(docsrs, feature(doc_cfg))]
