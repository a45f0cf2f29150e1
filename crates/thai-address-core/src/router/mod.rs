//! Query router: classify the query, call the provider, merge, de-duplicate.
//!
//! | Query shape            | Provider calls                                   | Post-processing |
//! |------------------------|--------------------------------------------------|-----------------|
//! | five ASCII digits      | `lookup_by_postal_code`                          | none            |
//! | two or more characters | `lookup_by_province`, `lookup_by_district`, `autocomplete` | concatenate in that order, de-duplicate |
//! | one character          | `search` with province = district = query       | none            |
//!
//! The router holds no state between calls. Readiness of the provider is
//! passed in by the caller; no provider call is made before it is `true`.

pub mod classify;
pub mod dedup;

pub use classify::QueryKind;
pub use dedup::deduplicate;

use std::sync::Arc;

use crate::error::{AddressError, SearchError};
use crate::model::{AddressHit, SearchParams};
use crate::traits::AddressProvider;

/// Result cap passed to `autocomplete` for compound queries.
pub const DEFAULT_AUTOCOMPLETE_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterConfig {
    pub autocomplete_limit: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            autocomplete_limit: DEFAULT_AUTOCOMPLETE_LIMIT,
        }
    }
}

impl RouterConfig {
    pub fn with_autocomplete_limit(mut self, limit: usize) -> Self {
        self.autocomplete_limit = limit;
        self
    }
}

/// Routes free-text queries to an [`AddressProvider`].
#[derive(Debug)]
pub struct QueryRouter<P> {
    provider: Arc<P>,
    config: RouterConfig,
}

impl<P> Clone for QueryRouter<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            config: self.config,
        }
    }
}

impl<P: AddressProvider> QueryRouter<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self::with_config(provider, RouterConfig::default())
    }

    pub fn with_config(provider: Arc<P>, config: RouterConfig) -> Self {
        Self { provider, config }
    }

    pub fn provider(&self) -> &Arc<P> {
        &self.provider
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Answer `query` (trimmed here) with an ordered, duplicate-free list.
    ///
    /// # Errors
    ///
    /// - [`SearchError::EmptyQuery`] for blank input,
    /// - [`SearchError::ProviderNotInitialized`] when `data_ready` is false,
    /// - [`SearchError::SearchFailed`] if any provider call fails. A failure in
    ///   one of the compound calls fails the whole query; nothing is retried.
    ///
    /// The first two are checked before any provider call is made.
    pub async fn route(&self, query: &str, data_ready: bool) -> Result<Vec<AddressHit>, SearchError> {
        let q = query.trim();
        let kind = QueryKind::classify(q)?;
        if !data_ready {
            return Err(SearchError::ProviderNotInitialized);
        }

        tracing::debug!(kind = kind.as_str(), "routing query");
        tracing::trace!(query = q, "routing query text");

        let outcome = match kind {
            QueryKind::PostalCode => self.postal_code(q).await,
            QueryKind::Compound => self.compound(q).await,
            QueryKind::Fallback => self.fallback(q).await,
        };

        match outcome {
            Ok(hits) => {
                tracing::debug!(kind = kind.as_str(), count = hits.len(), "query answered");
                Ok(hits)
            }
            Err(err) => {
                tracing::warn!(kind = kind.as_str(), error = %err, "address provider failed");
                Err(err.into())
            }
        }
    }

    async fn postal_code(&self, code: &str) -> Result<Vec<AddressHit>, AddressError> {
        self.provider.lookup_by_postal_code(code).await
    }

    /// The three calls run concurrently; the merge order is fixed regardless
    /// of which finishes first.
    async fn compound(&self, q: &str) -> Result<Vec<AddressHit>, AddressError> {
        let p = &self.provider;
        let (by_province, by_district, suggestions) = futures::try_join!(
            p.lookup_by_province(q),
            p.lookup_by_district(q),
            p.autocomplete(q, self.config.autocomplete_limit),
        )?;

        let mut merged =
            Vec::with_capacity(by_province.len() + by_district.len() + suggestions.len());
        merged.extend(by_province);
        merged.extend(by_district);
        merged.extend(suggestions);
        Ok(deduplicate(merged))
    }

    async fn fallback(&self, q: &str) -> Result<Vec<AddressHit>, AddressError> {
        self.provider
            .search(&SearchParams::province_and_district(q))
            .await
    }
}


#[cfg(test)]
mod tests {
    use super::mock::{Call, MockProvider};
    use super::*;

    fn router(provider: MockProvider) -> QueryRouter<MockProvider> {
        QueryRouter::new(Arc::new(provider))
    }

    fn h(sub: &str) -> AddressHit {
        AddressHit::new(sub, "บางรัก", "กรุงเทพมหานคร", "10500")
    }

    #[tokio::test]
    async fn postal_code_query_calls_only_postal_lookup() {
        let lumphini = AddressHit::new("Lumphini", "Pathum Wan", "Bangkok", "10330");
        let r = router(MockProvider::default().respond("postal", vec![lumphini.clone()]));

        let hits = r.route("10330", true).await.unwrap();
        assert_eq!(hits, vec![lumphini]);
        assert_eq!(r.provider().calls(), vec![Call::PostalCode("10330".into())]);
    }

    #[tokio::test]
    async fn postal_code_results_are_not_deduplicated() {
        let dup = vec![h("สีลม"), h("สีลม")];
        let r = router(MockProvider::default().respond("postal", dup.clone()));
        assert_eq!(r.route("10500", true).await.unwrap(), dup);
    }

    #[tokio::test]
    async fn compound_query_merges_in_fixed_order() {
        let (h1, h2) = (h("บางรัก"), h("สีลม"));
        let r = router(
            MockProvider::default()
                .respond("province", vec![])
                .respond("district", vec![h1.clone()])
                .respond("autocomplete", vec![h1.clone(), h2.clone()]),
        );

        let hits = r.route("บางรัก", true).await.unwrap();
        assert_eq!(hits, vec![h1, h2]);
        assert_eq!(
            r.provider().calls(),
            vec![
                Call::Province("บางรัก".into()),
                Call::District("บางรัก".into()),
                Call::Autocomplete("บางรัก".into(), DEFAULT_AUTOCOMPLETE_LIMIT),
            ]
        );
    }

    #[tokio::test]
    async fn province_hits_come_before_district_hits() {
        let r = router(
            MockProvider::default()
                .respond("province", vec![h("ก"), h("ข")])
                .respond("district", vec![h("ข"), h("ค")])
                .respond("autocomplete", vec![h("ง"), h("ก")]),
        );
        let subs: Vec<_> = r
            .route("กรุงเทพ", true)
            .await
            .unwrap()
            .into_iter()
            .map(|x| x.sub_district.unwrap())
            .collect();
        assert_eq!(subs, vec!["ก", "ข", "ค", "ง"]);
    }

    #[tokio::test]
    async fn merge_order_ignores_completion_order() {
        let r = router(
            MockProvider::default()
                .respond("province", vec![h("ก")])
                .respond("district", vec![h("ข")])
                .respond("autocomplete", vec![h("ค"), h("ก")])
                .slow("province", 5)
                .slow("district", 2),
        );

        let hits = r.route("กรุงเทพ", true).await.unwrap();
        assert_eq!(
            r.provider().completed(),
            vec!["autocomplete", "district", "province"]
        );
        let subs: Vec<_> = hits.iter().map(|x| x.sub_district.as_deref().unwrap()).collect();
        assert_eq!(subs, vec!["ก", "ข", "ค"]);
    }

    #[tokio::test]
    async fn single_character_uses_combined_search() {
        let r = router(MockProvider::default().respond("search", vec![h("ก"), h("ก")]));
        let hits = r.route(" ก ", true).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(
            r.provider().calls(),
            vec![Call::Search(SearchParams::province_and_district("ก"))]
        );
    }

    #[tokio::test]
    async fn blank_query_is_rejected_before_any_call() {
        let r = router(MockProvider::default());
        assert_eq!(r.route("", true).await, Err(SearchError::EmptyQuery));
        assert_eq!(r.route("   \t", false).await, Err(SearchError::EmptyQuery));
        assert!(r.provider().calls().is_empty());
    }

    #[tokio::test]
    async fn unready_provider_is_never_called() {
        let r = router(MockProvider::default());
        for q in ["10330", "บางรัก", "ก"] {
            assert_eq!(r.route(q, false).await, Err(SearchError::ProviderNotInitialized));
        }
        assert!(r.provider().calls().is_empty());
    }

    #[tokio::test]
    async fn all_compound_calls_failing_is_search_failed() {
        let r = router(
            MockProvider::default()
                .fail("province")
                .fail("district")
                .fail("autocomplete"),
        );
        let err = r.route("เชียงใหม่", true).await.unwrap_err();
        assert!(matches!(err, SearchError::SearchFailed(_)));
    }

    #[tokio::test]
    async fn one_failing_compound_call_discards_the_others() {
        let r = router(
            MockProvider::default()
                .respond("province", vec![h("ก")])
                .fail("district")
                .respond("autocomplete", vec![h("ข")]),
        );
        assert!(matches!(
            r.route("เชียงใหม่", true).await,
            Err(SearchError::SearchFailed(_))
        ));
    }

    #[tokio::test]
    async fn routing_is_idempotent() {
        let r = router(
            MockProvider::default()
                .respond("province", vec![h("ก")])
                .respond("autocomplete", vec![h("ข"), h("ก")]),
        );
        let first = r.route("ภูเก็ต", true).await;
        let second = r.route("ภูเก็ต", true).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn autocomplete_limit_is_configurable() {
        let r = QueryRouter::with_config(
            Arc::new(MockProvider::default()),
            RouterConfig::default().with_autocomplete_limit(5),
        );
        r.route("ลาดพร้าว", true).await.unwrap();
        assert!(r
            .provider()
            .calls()
            .contains(&Call::Autocomplete("ลาดพร้าว".into(), 5)));
    }
}
