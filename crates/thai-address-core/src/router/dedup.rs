//! Order-preserving de-duplication of address hits.
//!
//! Two hits are the same address when their (sub-district, district,
//! province, postal code) tuples are equal, an absent field reading as the
//! empty string. The first occurrence wins; no fuzzy merging is attempted.

use std::collections::HashSet;

use crate::model::AddressHit;

/// Drop every hit whose key was already seen, keeping first-seen order.
pub fn deduplicate(hits: Vec<AddressHit>) -> Vec<AddressHit> {
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(hits.len());
        hits.iter().map(|h| seen.insert(h.key())).collect()
    };

    hits.into_iter()
        .zip(keep)
        .filter_map(|(hit, first)| first.then_some(hit))
        .collect()
}
