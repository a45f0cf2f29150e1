//! Syntactic classification of a search query.

use crate::error::SearchError;
use crate::text::{char_len, is_postal_code};

/// The three query shapes the router knows how to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// Exactly five ASCII digits.
    PostalCode,
    /// Two or more characters that are not a postal code.
    Compound,
    /// A single UTF-16 unit.
    Fallback,
}

impl QueryKind {
    /// Classify an already-trimmed query.
    ///
    /// Rules are checked in priority order: postal code, then length ≥ 2,
    /// then the single-character fallback.
    ///
    /// ```rust
    /// use thai_address_core::router::QueryKind;
    ///
    /// assert_eq!(QueryKind::classify("10330"), Ok(QueryKind::PostalCode));
    /// assert_eq!(QueryKind::classify("บางรัก"), Ok(QueryKind::Compound));
    /// assert_eq!(QueryKind::classify("ก"), Ok(QueryKind::Fallback));
    /// assert!(QueryKind::classify("").is_err());
    /// ```
    pub fn classify(query: &str) -> Result<QueryKind, SearchError> {
        if query.is_empty() {
            Err(SearchError::EmptyQuery)
        } else if is_postal_code(query) {
            Ok(QueryKind::PostalCode)
        } else if char_len(query) >= 2 {
            Ok(QueryKind::Compound)
        } else {
            Ok(QueryKind::Fallback)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::PostalCode => "postal_code",
            QueryKind::Compound => "compound",
            QueryKind::Fallback => "fallback",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_strings_other_than_five_digits_are_compound() {
        assert_eq!(QueryKind::classify("1033"), Ok(QueryKind::Compound));
        assert_eq!(QueryKind::classify("103300"), Ok(QueryKind::Compound));
        assert_eq!(QueryKind::classify("10"), Ok(QueryKind::Compound));
    }

    #[test]
    fn single_digit_is_fallback() {
        assert_eq!(QueryKind::classify("5"), Ok(QueryKind::Fallback));
    }

    #[test]
    fn five_non_digits_are_compound() {
        assert_eq!(QueryKind::classify("Bang1"), Ok(QueryKind::Compound));
        assert_eq!(QueryKind::classify("๑๐๓๓๐"), Ok(QueryKind::Compound));
    }

    #[test]
    fn astral_character_counts_as_two_units() {
        assert_eq!(QueryKind::classify("😀"), Ok(QueryKind::Compound));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // one Thai letter is three UTF-8 bytes
        assert_eq!(QueryKind::classify("ข"), Ok(QueryKind::Fallback));
    }
}
