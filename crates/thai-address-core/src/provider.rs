//! The bundled [`AddressProvider`]: lookups over an in-memory [`AddressDb`].

use crate::common::{DbStats, Locale};
use crate::error::{AddressError, Result};
use crate::model::{AddressDb, AddressHit, SearchParams};
use crate::traits::{AddressProvider, AddressSearch};
use once_cell::sync::OnceCell;
use std::path::PathBuf;

/// Where [`ThaiAddressProvider::initialize`] gets its data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataSource {
    /// The sample dataset compiled into the crate.
    #[default]
    Embedded,
    /// A `.json`, `.json.gz` or binary cache file.
    Path(PathBuf),
    /// A JSON source file, read through its binary cache.
    CachedPath(PathBuf),
}

/// Configuration for [`ThaiAddressProvider`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    pub source: DataSource,
    pub locale: Locale,
}

impl ProviderConfig {
    pub fn builder() -> ProviderConfigBuilder {
        ProviderConfigBuilder::default()
    }
}

/// Builder for [`ProviderConfig`].
#[derive(Debug, Clone, Default)]
pub struct ProviderConfigBuilder {
    config: ProviderConfig,
}

impl ProviderConfigBuilder {
    pub fn source(mut self, source: DataSource) -> Self {
        self.config.source = source;
        self
    }

    pub fn data_path(self, path: impl Into<PathBuf>) -> Self {
        self.source(DataSource::Path(path.into()))
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.config.locale = locale;
        self
    }

    pub fn build(self) -> ProviderConfig {
        self.config
    }
}

/// Address provider backed by the flat in-memory database.
///
/// ```rust
/// use thai_address_core::{AddressProvider, ThaiAddressProvider};
///
/// # futures::executor::block_on(async {
/// let provider = ThaiAddressProvider::embedded();
/// provider.initialize().await?;
/// let hits = provider.lookup_by_postal_code("10330").await?;
/// assert!(!hits.is_empty());
/// # Ok::<(), thai_address_core::AddressError>(())
/// # }).unwrap();
/// ```
#[derive(Debug)]
pub struct ThaiAddressProvider {
    config: ProviderConfig,
    db: OnceCell<AddressDb>,
}

impl ThaiAddressProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Uninitialized provider over the embedded dataset, Thai output.
    pub fn embedded() -> Self {
        Self::new(ProviderConfig::default())
    }

    /// A provider that is ready immediately.
    pub fn from_db(db: AddressDb, locale: Locale) -> Self {
        Self {
            config: ProviderConfig {
                source: DataSource::Embedded,
                locale,
            },
            db: OnceCell::with_value(db),
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    /// Statistics of the loaded data, `None` before initialization.
    pub fn stats(&self) -> Option<DbStats> {
        self.database().map(AddressDb::stats)
    }

    /// The loaded database, `None` before initialization.
    pub fn database(&self) -> Option<&AddressDb> {
        self.db.get()
    }

    /// Blocking form of [`AddressProvider::initialize`].
    pub fn initialize_blocking(&self) -> Result<()> {
        self.db.get_or_try_init(|| load_source(&self.config.source))?;
        Ok(())
    }

    fn db(&self) -> Result<&AddressDb> {
        self.db.get().ok_or(AddressError::NotInitialized)
    }
}

fn load_source(source: &DataSource) -> Result<AddressDb> {
    let db = match source {
        DataSource::Embedded => AddressDb::load()?,
        DataSource::Path(path) => AddressDb::load_from_path(path)?,
        DataSource::CachedPath(path) => AddressDb::load_via_cache(path)?,
    };
    if db.is_empty() {
        return Err(AddressError::InvalidData("dataset has no sub-districts".into()));
    }
    let stats = db.stats();
    tracing::info!(
        provinces = stats.provinces,
        districts = stats.districts,
        sub_districts = stats.sub_districts,
        "address data ready"
    );
    Ok(db)
}

impl AddressProvider for ThaiAddressProvider {
    async fn initialize(&self) -> Result<()> {
        self.initialize_blocking()
    }

    fn is_ready(&self) -> bool {
        self.db.get().is_some()
    }

    async fn lookup_by_postal_code(&self, code: &str) -> Result<Vec<AddressHit>> {
        Ok(self.db()?.find_by_postal_code(code, self.locale()))
    }

    async fn lookup_by_province(&self, text: &str) -> Result<Vec<AddressHit>> {
        Ok(self.db()?.find_by_province(text, self.locale()))
    }

    async fn lookup_by_district(&self, text: &str) -> Result<Vec<AddressHit>> {
        Ok(self.db()?.find_by_district(text, self.locale()))
    }

    async fn search(&self, params: &SearchParams) -> Result<Vec<AddressHit>> {
        Ok(AddressSearch::search(self.db()?, params, self.locale()))
    }

    async fn autocomplete(&self, query: &str, limit: usize) -> Result<Vec<AddressHit>> {
        Ok(self.db()?.autocomplete(query, limit, self.locale()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn queries_fail_before_initialize() {
        let provider = ThaiAddressProvider::embedded();
        assert!(!provider.is_ready());
        let err = provider.lookup_by_postal_code("10330").await.unwrap_err();
        assert!(matches!(err, AddressError::NotInitialized));
    }

    #[tokio::test]
    async fn initialize_is_idempotent() {
        let provider = ThaiAddressProvider::embedded();
        provider.initialize().await.unwrap();
        provider.initialize().await.unwrap();
        assert!(provider.is_ready());
        assert_eq!(provider.stats().map(|s| s.provinces), Some(5));
    }

    #[tokio::test]
    async fn failed_initialize_leaves_provider_unready() {
        let config = ProviderConfig::builder()
            .data_path("/no/such/file.json")
            .build();
        let provider = ThaiAddressProvider::new(config);
        assert!(matches!(
            provider.initialize().await,
            Err(AddressError::NotFound(_))
        ));
        assert!(!provider.is_ready());
    }

    #[tokio::test]
    async fn english_locale_renders_romanized_names() {
        let provider = ThaiAddressProvider::from_db(AddressDb::load().unwrap(), Locale::English);
        let hits = provider.lookup_by_postal_code("10330").await.unwrap();
        assert_eq!(hits[0], AddressHit::new("Lumphini", "Pathum Wan", "Bangkok", "10330"));
    }
}
