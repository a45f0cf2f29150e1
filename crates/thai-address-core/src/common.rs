use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Simple aggregate statistics for the database.
///
/// Returned by [`AddressDb::stats`](crate::AddressDb::stats), these counts
/// reflect the materialized in-memory database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub provinces: usize,
    pub districts: usize,
    pub sub_districts: usize,
    pub postal_codes: usize,
}

/// Which name of each administrative level ends up in produced hits.
///
/// Matching always looks at both names; the locale only affects output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Thai,
    English,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Thai => "th",
            Locale::English => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "th" | "thai" => Ok(Locale::Thai),
            "en" | "english" => Ok(Locale::English),
            other => Err(format!("unknown locale: {other} (expected th or en)")),
        }
    }
}
