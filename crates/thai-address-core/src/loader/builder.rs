// crates/thai-address-core/src/loader/builder.rs
use super::common_io;
use crate::error::Result;
use crate::model::{AddressDb, CACHE_SUFFIX};
use bincode::Options;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

/// Upper bound on a decoded cache, to refuse corrupt or hostile files early.
const CACHE_LIMIT_BYTES: u64 = 64 * 1024 * 1024;

fn bincode_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(CACHE_LIMIT_BYTES)
        .allow_trailing_bytes()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip when the `compact` feature is on.
    pub fn preferred() -> Self {
        if cfg!(feature = "compact") {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

impl AddressDb {
    /// Reconstructs the database from its serialized binary form
    /// (already decompressed).
    ///
    /// The decoded indices are validated, so a stale or foreign cache is
    /// rejected with `InvalidData` instead of panicking a later lookup.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let db: Self = bincode_options().deserialize(data)?;
        db.validate()?;
        Ok(db)
    }

    /// Serialize into the binary form read by [`AddressDb::from_bytes`].
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode_options().serialize(self)?)
    }

    /// Write the binary cache to `path`, gzip-compressed under `compact`.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        write_generic(path.as_ref(), self, CompressionMode::preferred())
    }

    /// Read a cache written by [`AddressDb::save_as`].
    pub fn load_binary_file(path: impl AsRef<Path>) -> Result<Self> {
        let gzip = CompressionMode::preferred() == CompressionMode::Gzip;
        let mut stream = common_io::open_stream(path.as_ref(), gzip)?;
        let mut data = Vec::new();
        stream.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// **Smart Load:** uses the binary cache next to a JSON source when it is
    /// at least as new as the source, otherwise parses the source and
    /// refreshes the cache (best effort).
    pub fn load_via_cache(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let cache_path = Self::cache_path_for(path);

        if is_cache_fresh(path, &cache_path) {
            match Self::load_binary_file(&cache_path) {
                Ok(db) => {
                    tracing::debug!(cache = %cache_path.display(), "loaded address cache");
                    return Ok(db);
                }
                Err(err) => {
                    tracing::warn!(cache = %cache_path.display(), error = %err, "ignoring unreadable cache");
                }
            }
        }

        let db = Self::load_from_path(path)?;
        if let Err(err) = db.save_as(&cache_path) {
            tracing::warn!(cache = %cache_path.display(), error = %err, "could not write cache");
        }
        Ok(db)
    }

    /// Where [`AddressDb::load_via_cache`] keeps the cache for `source`.
    pub fn cache_path_for(source: &Path) -> PathBuf {
        common_io::get_cache_path(source, CACHE_SUFFIX)
    }
}

fn is_cache_fresh(source: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => true,
    }
}

/// Writes any serializable value as bincode, optionally gzip-compressed.
///
/// Returns only after the gzip trailer and the buffered bytes reached the
/// file, so a failed write is reported instead of leaving a truncated cache.
fn write_generic<T: serde::Serialize>(
    path: &Path,
    value: &T,
    compression: CompressionMode,
) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                bincode_options().serialize_into(&mut encoder, value)?;
                writer = encoder.finish()?;
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(crate::error::AddressError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => bincode_options().serialize_into(&mut writer, value)?,
    }

    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}
