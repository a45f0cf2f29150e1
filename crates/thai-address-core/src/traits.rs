// crates/thai-address-core/src/traits.rs
use crate::common::{DbStats, Locale};
use crate::error::Result;
use crate::model::flat::{District, Province, SubDistrict};
use crate::model::{AddressHit, SearchParams};
use crate::text::{fold_key, MatchRank, QueryText};
use std::future::Future;

/// Name-based matching helpers for administrative units that carry a Thai
/// name and, usually, a romanized one.
///
/// Implementors provide the two names; the trait supplies ranking:
/// - the Thai name is compared literally against the trimmed query;
/// - the English name is compared after [`fold_key`], and only for queries
///   that contain no Thai script (see [`QueryText`]).
///
/// # Examples
/// ```rust
/// use thai_address_core::text::{MatchRank, QueryText};
/// use thai_address_core::traits::NameMatch;
///
/// struct Place(&'static str, &'static str);
/// impl NameMatch for Place {
///     fn name_th(&self) -> &str { self.0 }
///     fn name_en(&self) -> Option<&str> { Some(self.1) }
/// }
///
/// let p = Place("บางรัก", "Bang Rak");
/// assert_eq!(p.match_rank(&QueryText::new("บางรัก")), Some(MatchRank::Exact));
/// assert_eq!(p.match_rank(&QueryText::new("bangr")), Some(MatchRank::Prefix));
/// assert!(!p.name_matches(&QueryText::new("สีลม")));
/// ```
pub trait NameMatch {
    fn name_th(&self) -> &str;
    fn name_en(&self) -> Option<&str>;

    /// Best rank over both names, or `None` if neither matches.
    fn match_rank(&self, q: &QueryText) -> Option<MatchRank> {
        if q.is_empty() {
            return None;
        }
        let thai = MatchRank::of(self.name_th(), q.raw());
        let english = match (self.name_en(), q.folded()) {
            (Some(en), Some(fq)) => MatchRank::of(&fold_key(en), fq),
            _ => None,
        };
        thai.max(english)
    }

    #[inline]
    fn name_matches(&self, q: &QueryText) -> bool {
        self.match_rank(q).is_some()
    }
}

impl NameMatch for Province {
    fn name_th(&self) -> &str {
        &self.name_th
    }
    fn name_en(&self) -> Option<&str> {
        self.name_en.as_deref()
    }
}

impl NameMatch for District {
    fn name_th(&self) -> &str {
        &self.name_th
    }
    fn name_en(&self) -> Option<&str> {
        self.name_en.as_deref()
    }
}

impl NameMatch for SubDistrict {
    fn name_th(&self) -> &str {
        &self.name_th
    }
    fn name_en(&self) -> Option<&str> {
        self.name_en.as_deref()
    }
}

/// Synchronous lookups over a loaded database.
///
/// Every operation returns hits in dataset order unless stated otherwise,
/// rendered in `locale`.
pub trait AddressSearch {
    fn stats(&self) -> DbStats;

    /// Sub-districts whose postal code equals `code` (trimmed).
    fn find_by_postal_code(&self, code: &str, locale: Locale) -> Vec<AddressHit>;

    /// Every sub-district of every province whose name matches `text`.
    fn find_by_province(&self, text: &str, locale: Locale) -> Vec<AddressHit>;

    /// Every sub-district of every district whose name matches `text`.
    fn find_by_district(&self, text: &str, locale: Locale) -> Vec<AddressHit>;

    /// Sub-districts satisfying every criterion set in `params`.
    fn search(&self, params: &SearchParams, locale: Locale) -> Vec<AddressHit>;

    /// Ranked completion over sub-districts, best first, at most `limit`.
    fn autocomplete(&self, query: &str, limit: usize, locale: Locale) -> Vec<AddressHit>;
}

/// The capability the query router is written against.
///
/// `initialize` must complete successfully before the query operations
/// return meaningful results. All query operations are side-effect-free
/// reads; their futures are `Send` so a caller may await several at once.
pub trait AddressProvider: Send + Sync {
    /// Load and index the address data. Calling it again after success is a no-op.
    fn initialize(&self) -> impl Future<Output = Result<()>> + Send;

    fn is_ready(&self) -> bool;

    fn lookup_by_postal_code(&self, code: &str)
        -> impl Future<Output = Result<Vec<AddressHit>>> + Send;

    fn lookup_by_province(&self, text: &str)
        -> impl Future<Output = Result<Vec<AddressHit>>> + Send;

    fn lookup_by_district(&self, text: &str)
        -> impl Future<Output = Result<Vec<AddressHit>>> + Send;

    fn search(&self, params: &SearchParams)
        -> impl Future<Output = Result<Vec<AddressHit>>> + Send;

    fn autocomplete(
        &self,
        query: &str,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<AddressHit>>> + Send;
}
