// crates/thai-address-core/src/model/raw.rs
use serde::Deserialize;

/// Raw sub-district (tambon / khwaeng) as it comes from JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct SubDistrictRaw {
    #[serde(alias = "name")]
    pub name_th: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default, alias = "zipcode")]
    pub postal_code: Option<String>,
}

/// Raw district (amphoe / khet) from JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct DistrictRaw {
    #[serde(alias = "name")]
    pub name_th: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub sub_districts: Vec<SubDistrictRaw>,
}

/// Raw province (changwat) from JSON.
/// We do *not* expose this type from the public API beyond the loader.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvinceRaw {
    #[serde(alias = "name")]
    pub name_th: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub districts: Vec<DistrictRaw>,
}

pub type ProvincesRaw = Vec<ProvinceRaw>;
