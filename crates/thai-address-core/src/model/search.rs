// crates/thai-address-core/src/model/search.rs
use super::flat::AddressDb;
use super::hit::AddressHit;
use crate::common::{DbStats, Locale};
use crate::text::{MatchRank, QueryText};
use crate::traits::{AddressSearch, NameMatch};
use serde::{Deserialize, Serialize};

/// Criteria for [`AddressSearch::search`]. Unset or blank fields are ignored;
/// the rest must all match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub province: Option<String>,
    pub district: Option<String>,
    pub sub_district: Option<String>,
    /// Matched as a prefix, so `"103"` finds every `103xx` code.
    pub postal_code: Option<String>,
}

impl SearchParams {
    /// Same text for both province and district.
    pub fn province_and_district(text: &str) -> Self {
        Self {
            province: Some(text.to_string()),
            district: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        [
            &self.province,
            &self.district,
            &self.sub_district,
            &self.postal_code,
        ]
        .iter()
        .all(|f| f.as_deref().map_or(true, |s| s.trim().is_empty()))
    }
}

fn criterion(field: &Option<String>) -> Option<QueryText> {
    field
        .as_deref()
        .map(QueryText::new)
        .filter(|q| !q.is_empty())
}

/// Autocomplete score for one match at one administrative level.
fn level_score(rank: Option<MatchRank>, exact: u8, prefix: u8, contains: u8) -> u8 {
    match rank {
        Some(MatchRank::Exact) => exact,
        Some(MatchRank::Prefix) => prefix,
        Some(MatchRank::Contains) => contains,
        None => 0,
    }
}

impl AddressSearch for AddressDb {
    fn stats(&self) -> DbStats {
        AddressDb::stats(self)
    }

    fn find_by_postal_code(&self, code: &str, locale: Locale) -> Vec<AddressHit> {
        let code = code.trim();
        if code.is_empty() {
            return Vec::new();
        }
        self.iter_sub_districts()
            .filter(|(s, _, _)| s.postal_code() == code)
            .map(|ctx| AddressHit::from_context(ctx, locale))
            .collect()
    }

    fn find_by_province(&self, text: &str, locale: Locale) -> Vec<AddressHit> {
        let q = QueryText::new(text);
        let mut out = Vec::new();
        if q.is_empty() {
            return out;
        }
        for province in self.provinces.iter().filter(|p| p.name_matches(&q)) {
            for district in self.districts_of(province) {
                for sub in self.sub_districts_of(district) {
                    out.push(AddressHit::from_context((sub, district, province), locale));
                }
            }
        }
        out
    }

    fn find_by_district(&self, text: &str, locale: Locale) -> Vec<AddressHit> {
        let q = QueryText::new(text);
        let mut out = Vec::new();
        if q.is_empty() {
            return out;
        }
        for district in self.districts.iter().filter(|d| d.name_matches(&q)) {
            let province = &self.provinces[district.province_id as usize];
            for sub in self.sub_districts_of(district) {
                out.push(AddressHit::from_context((sub, district, province), locale));
            }
        }
        out
    }

    fn search(&self, params: &SearchParams, locale: Locale) -> Vec<AddressHit> {
        if params.is_empty() {
            return Vec::new();
        }
        let province = criterion(&params.province);
        let district = criterion(&params.district);
        let sub_district = criterion(&params.sub_district);
        let postal = params
            .postal_code
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        self.iter_sub_districts()
            .filter(|(s, d, p)| {
                province.as_ref().map_or(true, |q| p.name_matches(q))
                    && district.as_ref().map_or(true, |q| d.name_matches(q))
                    && sub_district.as_ref().map_or(true, |q| s.name_matches(q))
                    && postal.map_or(true, |code| s.postal_code().starts_with(code))
            })
            .map(|ctx| AddressHit::from_context(ctx, locale))
            .collect()
    }

    /// Scoring (a record keeps its best score):
    ///
    /// - Postal code exact: **100**, prefix: **90**
    /// - Sub-district exact / prefix / substring: **80 / 70 / 60**
    /// - District exact / prefix / substring: **50 / 45 / 40**
    /// - Province exact / prefix / substring: **30 / 25 / 20**
    ///
    /// Ties keep dataset order.
    fn autocomplete(&self, query: &str, limit: usize, locale: Locale) -> Vec<AddressHit> {
        let q = QueryText::new(query);
        if q.is_empty() || limit == 0 {
            return Vec::new();
        }
        let digits = q.raw().bytes().all(|b| b.is_ascii_digit());

        let mut scored: Vec<(u8, AddressHit)> = Vec::new();
        for ctx in self.iter_sub_districts() {
            let (sub, district, province) = ctx;

            let postal = if digits {
                let code = sub.postal_code();
                if code == q.raw() {
                    100
                } else if code.starts_with(q.raw()) {
                    90
                } else {
                    0
                }
            } else {
                0
            };

            let score = postal
                .max(level_score(sub.match_rank(&q), 80, 70, 60))
                .max(level_score(district.match_rank(&q), 50, 45, 40))
                .max(level_score(province.match_rank(&q), 30, 25, 20));

            if score > 0 {
                scored.push((score, AddressHit::from_context(ctx, locale)));
            }
        }

        // Stable sort: equal scores stay in dataset order.
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(limit);
        scored.into_iter().map(|(_, hit)| hit).collect()
    }
}
