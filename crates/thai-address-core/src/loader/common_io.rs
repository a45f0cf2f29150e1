// crates/thai-address-core/src/loader/common_io.rs
use crate::error::{AddressError, Result};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a file, buffers it, and optionally wraps it in a Gzip decoder.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path, gzip: bool) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AddressError::NotFound(format!("{}: {}", path.display(), e)),
        _ => AddressError::Io(e),
    })?;

    let reader = BufReader::new(file);

    if !gzip {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(AddressError::InvalidData(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

/// `thai_addresses.json` -> `thai_addresses.json.<suffix>` next to the source.
pub fn get_cache_path(json_path: &Path, suffix: &str) -> PathBuf {
    let filename = json_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| "addresses".to_string());
    json_path.with_file_name(format!("{filename}.{suffix}"))
}

/// How a dataset file is encoded, decided by its file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    JsonGz,
    Binary,
}

impl DatasetFormat {
    pub fn detect(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|f| f.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        if name.ends_with(".json.gz") {
            DatasetFormat::JsonGz
        } else if name.ends_with(".json") {
            DatasetFormat::Json
        } else {
            DatasetFormat::Binary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(DatasetFormat::detect(Path::new("a/b.json")), DatasetFormat::Json);
        assert_eq!(DatasetFormat::detect(Path::new("B.JSON.GZ")), DatasetFormat::JsonGz);
        assert_eq!(DatasetFormat::detect(Path::new("b.json.comp.bin")), DatasetFormat::Binary);
    }

    #[test]
    fn cache_path_sits_next_to_source() {
        let p = get_cache_path(Path::new("/data/thai.json"), "bin");
        assert_eq!(p, PathBuf::from("/data/thai.json.bin"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = open_stream(Path::new("/definitely/not/here.json"), false).err();
        assert!(matches!(err, Some(AddressError::NotFound(_))));
    }

    #[test]
    fn other_open_failures_stay_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.json");
        std::fs::write(&file, "[]").unwrap();

        // a regular file used as a directory: ENOTDIR, not a missing file
        let err = open_stream(&file.join("nested.json"), false).err();
        assert!(matches!(err, Some(AddressError::Io(_))));
    }
}
