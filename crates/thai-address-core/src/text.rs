// crates/thai-address-core/src/text.rs

/// Convert a string into a folded key suitable for comparing romanized names.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Phuéket` -> `Phueket`)
/// 2\) Normalize to lowercase
/// 3\) Drop whitespace, so `"pathumwan"` and `"Pathum Wan"` fold alike
///
/// # Examples
///
/// ```rust
/// use thai_address_core::text::fold_key;
///
/// assert_eq!(fold_key("Pathum Wan"), "pathumwan");
/// assert_eq!(fold_key("  Sí Lom "), "silom");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s)
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Length of `s` in UTF-16 code units, the length a browser reports.
///
/// Thai letters and marks are one unit each; characters outside the Basic
/// Multilingual Plane (emoji) count as two.
///
/// ```rust
/// use thai_address_core::text::char_len;
///
/// assert_eq!(char_len("บางรัก"), 6);
/// assert_eq!(char_len("😀"), 2);
/// ```
pub fn char_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// `true` when `s` is exactly five ASCII decimal digits, the shape of a Thai
/// postal code.
///
/// ```rust
/// use thai_address_core::text::is_postal_code;
///
/// assert!(is_postal_code("10330"));
/// assert!(!is_postal_code("1033"));
/// assert!(!is_postal_code("๑๐๓๓๐")); // Thai digits are not ASCII
/// ```
pub fn is_postal_code(s: &str) -> bool {
    s.len() == 5 && s.bytes().all(|b| b.is_ascii_digit())
}

/// `true` if `s` contains any character from the Thai Unicode block.
pub fn has_thai(s: &str) -> bool {
    s.chars().any(|c| ('\u{0E00}'..='\u{0E7F}').contains(&c))
}

/// How closely a name matched a query. Ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchRank {
    Contains,
    Prefix,
    Exact,
}

impl MatchRank {
    /// Rank `needle` against `haystack`; `None` when it does not occur.
    pub fn of(haystack: &str, needle: &str) -> Option<MatchRank> {
        if needle.is_empty() {
            None
        } else if haystack == needle {
            Some(MatchRank::Exact)
        } else if haystack.starts_with(needle) {
            Some(MatchRank::Prefix)
        } else if haystack.contains(needle) {
            Some(MatchRank::Contains)
        } else {
            None
        }
    }
}

/// A query prepared once for matching against many names.
///
/// Thai-script queries are compared literally. Queries without Thai script
/// are additionally folded for comparison against romanized names; Thai
/// queries are never folded, since transliterating a single Thai letter
/// would match nearly every romanized name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryText {
    raw: String,
    folded: Option<String>,
}

impl QueryText {
    pub fn new(query: &str) -> Self {
        let raw = query.trim().to_string();
        let folded = if has_thai(&raw) {
            None
        } else {
            Some(fold_key(&raw)).filter(|f| !f.is_empty())
        };
        Self { raw, folded }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn folded(&self) -> Option<&str> {
        self.folded.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_key_ignores_case_and_spaces() {
        assert_eq!(fold_key("Chiang Mai"), fold_key("chiangmai"));
        assert_eq!(fold_key("BANG RAK"), fold_key("bang rak"));
        assert_ne!(fold_key("Bang Rak"), fold_key("Bang Na"));
    }

    #[test]
    fn char_len_counts_thai_code_points() {
        assert_eq!(char_len("บางรัก"), 6);
        assert_eq!(char_len("ก"), 1);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn match_rank_orders_exact_over_prefix_over_contains() {
        assert_eq!(MatchRank::of("บางรัก", "บางรัก"), Some(MatchRank::Exact));
        assert_eq!(MatchRank::of("บางรักน้อย", "บางรัก"), Some(MatchRank::Prefix));
        assert_eq!(MatchRank::of("เมืองเชียงใหม่", "เชียงใหม่"), Some(MatchRank::Contains));
        assert_eq!(MatchRank::of("สีลม", "บางรัก"), None);
        assert_eq!(MatchRank::of("สีลม", ""), None);
        assert!(MatchRank::Exact > MatchRank::Prefix && MatchRank::Prefix > MatchRank::Contains);
    }

    #[test]
    fn thai_queries_are_not_folded() {
        let q = QueryText::new(" ก ");
        assert_eq!(q.raw(), "ก");
        assert_eq!(q.folded(), None);

        let q = QueryText::new("Chiang Mai");
        assert_eq!(q.folded(), Some("chiangmai"));
    }

    #[test]
    fn postal_code_shape() {
        assert!(is_postal_code("50200"));
        assert!(!is_postal_code("502000"));
        assert!(!is_postal_code("5020a"));
        assert!(!is_postal_code(""));
    }
}
