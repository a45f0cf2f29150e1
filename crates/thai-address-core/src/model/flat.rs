// crates/thai-address-core/src/model/flat.rs
use crate::common::{DbStats, Locale};
use crate::error::{AddressError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Range;

/// The master database struct.
/// Laid out as "Structure of Arrays": every level lives in one contiguous
/// vector and parents address their children through index ranges.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressDb {
    /// Master list of all provinces, in dataset order.
    pub provinces: Vec<Province>,
    /// Master list of all districts. Contiguous per province.
    pub districts: Vec<District>,
    /// Master list of all sub-districts. Contiguous per district.
    pub sub_districts: Vec<SubDistrict>,
}

/// A Province (changwat) entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Province {
    pub id: u16,
    pub name_th: String,
    pub name_en: Option<String>,
    /// 77 provinces, ~930 districts: u16 is plenty.
    pub districts_range: Range<u16>,
    /// ~7.4k sub-districts nationwide. Kept u32 like the other sub-district ranges.
    pub sub_districts_range: Range<u32>,
}

/// A District (amphoe / khet) entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub id: u16,
    pub province_id: u16,
    pub name_th: String,
    pub name_en: Option<String>,
    pub sub_districts_range: Range<u32>,
}

/// A Sub-district (tambon / khwaeng) entry. One per addressable record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubDistrict {
    pub province_id: u16,
    pub district_id: u16,
    pub name_th: String,
    pub name_en: Option<String>,
    pub postal_code: Option<String>,
}

/// A sub-district together with its parents.
pub type SubDistrictContext<'a> = (&'a SubDistrict, &'a District, &'a Province);

fn localized<'a>(th: &'a str, en: Option<&'a str>, locale: Locale) -> &'a str {
    match locale {
        Locale::Thai => th,
        Locale::English => en.filter(|s| !s.is_empty()).unwrap_or(th),
    }
}

impl AddressDb {
    pub fn stats(&self) -> DbStats {
        let postal_codes = self
            .sub_districts
            .iter()
            .filter_map(|s| s.postal_code.as_deref())
            .collect::<HashSet<_>>()
            .len();
        DbStats {
            provinces: self.provinces.len(),
            districts: self.districts.len(),
            sub_districts: self.sub_districts.len(),
            postal_codes,
        }
    }

    /// Check that every parent id and child range points inside the
    /// vectors. A database built by `from_raw` always passes; a decoded cache
    /// has to be checked before any lookup indexes into it.
    pub fn validate(&self) -> Result<()> {
        let (n_provinces, n_districts, n_subs) =
            (self.provinces.len(), self.districts.len(), self.sub_districts.len());

        for p in &self.provinces {
            let districts = p.districts_range.start as usize..p.districts_range.end as usize;
            let subs = p.sub_districts_range.start as usize..p.sub_districts_range.end as usize;
            check_range(districts, n_districts, "province", &p.name_th)?;
            check_range(subs, n_subs, "province", &p.name_th)?;
        }
        for d in &self.districts {
            if d.province_id as usize >= n_provinces {
                return Err(invalid("district", &d.name_th, "province id out of range"));
            }
            let subs = d.sub_districts_range.start as usize..d.sub_districts_range.end as usize;
            check_range(subs, n_subs, "district", &d.name_th)?;
        }
        for s in &self.sub_districts {
            if s.province_id as usize >= n_provinces {
                return Err(invalid("sub-district", &s.name_th, "province id out of range"));
            }
            if s.district_id as usize >= n_districts {
                return Err(invalid("sub-district", &s.name_th, "district id out of range"));
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.sub_districts.is_empty()
    }

    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    /// Districts belonging to `province`, resolved through its index range.
    pub fn districts_of(&self, province: &Province) -> &[District] {
        let r = province.districts_range.start as usize..province.districts_range.end as usize;
        &self.districts[r]
    }

    /// Sub-districts belonging to `district`.
    pub fn sub_districts_of(&self, district: &District) -> &[SubDistrict] {
        let r = district.sub_districts_range.start as usize
            ..district.sub_districts_range.end as usize;
        &self.sub_districts[r]
    }

    /// Iterate every sub-district with its parents, in dataset order.
    pub fn iter_sub_districts(&self) -> impl Iterator<Item = SubDistrictContext<'_>> + '_ {
        self.sub_districts.iter().map(move |s| {
            let district = &self.districts[s.district_id as usize];
            let province = &self.provinces[s.province_id as usize];
            (s, district, province)
        })
    }
}

fn invalid(level: &str, name: &str, problem: &str) -> AddressError {
    AddressError::InvalidData(format!("{level} '{name}': {problem}"))
}

fn check_range(r: Range<usize>, len: usize, level: &str, name: &str) -> Result<()> {
    if r.start > r.end || r.end > len {
        return Err(invalid(level, name, "child range out of bounds"));
    }
    Ok(())
}

impl Province {
    pub fn name(&self, locale: Locale) -> &str {
        localized(&self.name_th, self.name_en.as_deref(), locale)
    }
}

impl District {
    pub fn name(&self, locale: Locale) -> &str {
        localized(&self.name_th, self.name_en.as_deref(), locale)
    }
}

impl SubDistrict {
    pub fn name(&self, locale: Locale) -> &str {
        localized(&self.name_th, self.name_en.as_deref(), locale)
    }

    pub fn postal_code(&self) -> &str {
        self.postal_code.as_deref().unwrap_or("")
    }
}
