// crates/thai-address-core/src/model/convert.rs
use super::flat::{AddressDb, District, Province, SubDistrict};
use super::raw::ProvinceRaw;
use crate::error::{AddressError, Result};

fn clean(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn required(name: &str, what: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AddressError::InvalidData(format!("{what} with empty name")));
    }
    Ok(name.to_string())
}

fn id16(len: usize, what: &str) -> Result<u16> {
    u16::try_from(len).map_err(|_| AddressError::InvalidData(format!("too many {what}")))
}

fn id32(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| AddressError::InvalidData("too many sub-districts".into()))
}

/// **Standard Converter:** Raw tree -> Flat.
///
/// Names are trimmed; blank optional fields become `None`. A blank Thai name
/// at any level is rejected.
pub fn from_raw(raw_provinces: Vec<ProvinceRaw>) -> Result<AddressDb> {
    let mut db = AddressDb::default();

    for p_raw in raw_provinces {
        let p_id = id16(db.provinces.len(), "provinces")?;
        let district_start = id16(db.districts.len(), "districts")?;
        let p_sub_start = id32(db.sub_districts.len())?;
        let p_name = required(&p_raw.name_th, "province")?;

        for d_raw in p_raw.districts {
            let d_id = id16(db.districts.len(), "districts")?;
            let d_sub_start = id32(db.sub_districts.len())?;
            let d_name = required(&d_raw.name_th, "district")?;

            for s_raw in d_raw.sub_districts {
                db.sub_districts.push(SubDistrict {
                    province_id: p_id,
                    district_id: d_id,
                    name_th: required(&s_raw.name_th, "sub-district")?,
                    name_en: clean(s_raw.name_en),
                    postal_code: clean(s_raw.postal_code),
                });
            }

            db.districts.push(District {
                id: d_id,
                province_id: p_id,
                name_th: d_name,
                name_en: clean(d_raw.name_en),
                sub_districts_range: d_sub_start..id32(db.sub_districts.len())?,
            });
        }

        db.provinces.push(Province {
            id: p_id,
            name_th: p_name,
            name_en: clean(p_raw.name_en),
            districts_range: district_start..id16(db.districts.len(), "districts")?,
            sub_districts_range: p_sub_start..id32(db.sub_districts.len())?,
        });
    }

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::raw::ProvincesRaw;

    fn parse(json: &str) -> Result<AddressDb> {
        let raw: ProvincesRaw = serde_json::from_str(json)?;
        from_raw(raw)
    }

    #[test]
    fn flattens_tree_with_ranges() {
        let db = parse(
            r#"[
              {"name_th": "ก", "districts": [
                {"name_th": "ข", "sub_districts": [
                  {"name_th": "ค", "postal_code": "10000"},
                  {"name_th": "ง", "postal_code": " "}
                ]},
                {"name_th": "จ", "sub_districts": [{"name_th": "ฉ"}]}
              ]},
              {"name_th": "ช", "name_en": " Cho ", "districts": []}
            ]"#,
        )
        .unwrap();

        assert_eq!(db.provinces.len(), 2);
        assert_eq!(db.districts.len(), 2);
        assert_eq!(db.sub_districts.len(), 3);
        assert_eq!(db.provinces[0].districts_range, 0..2);
        assert_eq!(db.provinces[0].sub_districts_range, 0..3);
        assert_eq!(db.districts[1].sub_districts_range, 2..3);
        assert_eq!(db.sub_districts[2].district_id, 1);
        assert_eq!(db.sub_districts[1].postal_code, None);
        assert_eq!(db.provinces[1].name_en.as_deref(), Some("Cho"));
        assert!(db.provinces[1].districts_range.is_empty());
    }

    #[test]
    fn blank_names_are_rejected() {
        let err = parse(r#"[{"name_th": "  ", "districts": []}]"#).unwrap_err();
        assert!(matches!(err, AddressError::InvalidData(_)));
    }
}
