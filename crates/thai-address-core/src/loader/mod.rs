// crates/thai-address-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (Binary vs JSON).

use crate::error::{AddressError, Result};
use crate::model::convert::from_raw;
use crate::model::raw::ProvincesRaw;
use crate::model::AddressDb;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};

pub mod builder;
pub mod common_io;

pub use builder::CompressionMode;
pub use common_io::DatasetFormat;

/// The sample dataset compiled into the crate.
pub const EMBEDDED_DATASET: &str = include_str!("../../data/thai_addresses.json");

// Single in-process cache so we only parse the embedded dataset once per process.
static ADDRESS_DB_CACHE: OnceCell<AddressDb> = OnceCell::new();

impl AddressDb {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "thai_addresses.json"
    }

    /// Load the embedded dataset. Parsed on first use, then cloned from the
    /// process-wide cache.
    pub fn load() -> Result<Self> {
        ADDRESS_DB_CACHE
            .get_or_try_init(|| Self::from_json_str(EMBEDDED_DATASET))
            .cloned()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: ProvincesRaw = serde_json::from_str(json)?;
        from_raw(raw)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: ProvincesRaw = serde_json::from_reader(reader)?;
        from_raw(raw)
    }

    /// Load a dataset file, choosing the parser from its name:
    /// `.json`, `.json.gz`, or anything else as a binary cache.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = DatasetFormat::detect(path);
        tracing::debug!(path = %path.display(), ?format, "loading address dataset");

        match format {
            DatasetFormat::Json | DatasetFormat::JsonGz => {
                if !cfg!(feature = "json") {
                    return Err(AddressError::InvalidData(
                        "JSON datasets need the 'json' feature".into(),
                    ));
                }
                let reader = common_io::open_stream(path, format == DatasetFormat::JsonGz)?;
                Self::from_json_reader(reader)
            }
            DatasetFormat::Binary => Self::load_binary_file(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_dataset_loads() {
        let db = AddressDb::load().unwrap();
        let stats = db.stats();
        assert_eq!(stats.provinces, 5);
        assert_eq!(stats.districts, 12);
        assert_eq!(stats.sub_districts, 39);
        assert_eq!(stats.postal_codes, 19);
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_file_matches_embedded() {
        let path = AddressDb::default_data_dir().join(AddressDb::default_dataset_filename());
        let from_file = AddressDb::load_from_path(&path).unwrap();
        assert_eq!(from_file, AddressDb::load().unwrap());
    }

    #[cfg(all(feature = "json", feature = "compact"))]
    #[test]
    fn gzip_json_loads() {
        use flate2::{write::GzEncoder, Compression};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thai.json.gz");
        let mut enc = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::fast());
        enc.write_all(EMBEDDED_DATASET.as_bytes()).unwrap();
        enc.finish().unwrap();

        assert_eq!(AddressDb::load_from_path(&path).unwrap(), AddressDb::load().unwrap());
    }

    #[cfg(feature = "json")]
    #[test]
    fn malformed_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"[{\"name_th\": ")
            .unwrap();
        let err = AddressDb::load_from_path(&path).unwrap_err();
        assert!(matches!(err, AddressError::Json(_)));
    }

    #[cfg(not(feature = "json"))]
    #[test]
    fn json_paths_are_rejected_without_the_feature() {
        let path = AddressDb::default_data_dir().join(AddressDb::default_dataset_filename());
        let err = AddressDb::load_from_path(&path).unwrap_err();
        assert!(matches!(err, AddressError::InvalidData(_)));
        // the embedded dataset still parses
        assert!(AddressDb::load().is_ok());
    }

    #[cfg(feature = "json")]
    #[test]
    fn missing_file_is_not_found() {
        let err = AddressDb::load_from_path("/no/such/dataset.json").unwrap_err();
        assert!(matches!(err, AddressError::NotFound(_)));
    }

    #[cfg(feature = "json")]
    #[test]
    fn load_via_cache_writes_and_reuses_cache() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("thai.json");
        std::fs::write(&source, EMBEDDED_DATASET).unwrap();

        let first = AddressDb::load_via_cache(&source).unwrap();
        assert!(AddressDb::cache_path_for(&source).exists());
        let second = AddressDb::load_via_cache(&source).unwrap();
        assert_eq!(first, second);
    }
}
