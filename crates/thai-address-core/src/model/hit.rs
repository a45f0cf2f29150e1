// crates/thai-address-core/src/model/hit.rs
use super::flat::SubDistrictContext;
use crate::common::Locale;
use serde::{Deserialize, Serialize};

/// Shown in place of a missing field.
pub const PLACEHOLDER: &str = "—";

/// Separator between fields in [`AddressHit::display_line`].
pub const FIELD_SEPARATOR: &str = " · ";

/// One candidate address record.
///
/// Every field is optional; the JSON form uses the camelCase names a web
/// front-end expects (`subDistrict`, `district`, `province`, `postalCode`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressHit {
    #[serde(default)]
    pub sub_district: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

/// Identity of a hit for de-duplication: the four fields, absent read as `""`.
pub type HitKey<'a> = (&'a str, &'a str, &'a str, &'a str);

/// The four display fields of a hit, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitField {
    SubDistrict,
    District,
    Province,
    PostalCode,
}

impl HitField {
    pub const ALL: [HitField; 4] = [
        HitField::SubDistrict,
        HitField::District,
        HitField::Province,
        HitField::PostalCode,
    ];
}

impl AddressHit {
    pub fn new(
        sub_district: impl Into<String>,
        district: impl Into<String>,
        province: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            sub_district: Some(sub_district.into()),
            district: Some(district.into()),
            province: Some(province.into()),
            postal_code: Some(postal_code.into()),
        }
    }

    /// Materialize one sub-district with its parents in the given locale.
    pub fn from_context((sub, district, province): SubDistrictContext<'_>, locale: Locale) -> Self {
        Self {
            sub_district: Some(sub.name(locale).to_string()),
            district: Some(district.name(locale).to_string()),
            province: Some(province.name(locale).to_string()),
            postal_code: sub.postal_code.clone(),
        }
    }

    pub fn get(&self, field: HitField) -> Option<&str> {
        match field {
            HitField::SubDistrict => self.sub_district.as_deref(),
            HitField::District => self.district.as_deref(),
            HitField::Province => self.province.as_deref(),
            HitField::PostalCode => self.postal_code.as_deref(),
        }
    }

    pub fn key(&self) -> HitKey<'_> {
        fn f(v: &Option<String>) -> &str {
            v.as_deref().unwrap_or("")
        }
        (
            f(&self.sub_district),
            f(&self.district),
            f(&self.province),
            f(&self.postal_code),
        )
    }

    /// The field value, or [`PLACEHOLDER`] when it is absent or empty.
    pub fn field_or_placeholder(&self, field: HitField) -> &str {
        self.get(field).filter(|s| !s.is_empty()).unwrap_or(PLACEHOLDER)
    }

    /// Non-empty fields joined with `" · "`.
    ///
    /// ```rust
    /// use thai_address_core::AddressHit;
    ///
    /// let hit = AddressHit::new("Lumphini", "Pathum Wan", "Bangkok", "10330");
    /// assert_eq!(hit.display_line(), "Lumphini · Pathum Wan · Bangkok · 10330");
    /// ```
    pub fn display_line(&self) -> String {
        HitField::ALL
            .iter()
            .filter_map(|f| self.get(*f))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(FIELD_SEPARATOR)
    }
}
