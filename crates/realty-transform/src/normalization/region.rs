//! Region and city name canonicalization.
//!
//! Listing exports spell the same region half a dozen ways ("Московская
//! обл", "Моск. обл.", "Московская область"). The canonical spellings
//! below match the economic-statistics export, so the join step can key
//! on them directly.

use realty_model::CanonicalLookup;

const REGION_SYNONYMS: &[(&str, &str)] = &[
    ("Московская обл", "Московская область"),
    ("Московская обл.", "Московская область"),
    ("Моск. обл.", "Московская область"),
    ("г. Москва", "Москва"),
    ("Москва г", "Москва"),
    ("г. Санкт-Петербург", "Санкт-Петербург"),
    ("Санкт-Петербург г", "Санкт-Петербург"),
    ("СПб", "Санкт-Петербург"),
    ("Ленинградская обл", "Ленинградская область"),
    ("Респ Татарстан", "Республика Татарстан"),
    ("Респ. Татарстан", "Республика Татарстан"),
    ("Татарстан", "Республика Татарстан"),
    ("Башкортостан", "Республика Башкортостан"),
    ("Респ Башкортостан", "Республика Башкортостан"),
    ("Нижегородская обл", "Нижегородская область"),
    ("Нижегородская обл.", "Нижегородская область"),
    ("Свердловская обл", "Свердловская область"),
    ("Свердловская обл.", "Свердловская область"),
    ("Новосибирская обл", "Новосибирская область"),
    ("Ростовская обл", "Ростовская область"),
    ("Краснодарский кр", "Краснодарский край"),
    ("Краснодарский кр.", "Краснодарский край"),
];

const CITY_SYNONYMS: &[(&str, &str)] = &[
    ("СПб", "Санкт-Петербург"),
    ("Питер", "Санкт-Петербург"),
    ("Н. Новгород", "Нижний Новгород"),
    ("Н.Новгород", "Нижний Новгород"),
    ("Екб", "Екатеринбург"),
    ("Ростов-на-дону", "Ростов-на-Дону"),
];

/// Lookup table for region names.
pub fn region_lookup() -> CanonicalLookup {
    CanonicalLookup::new(REGION_SYNONYMS.iter().copied())
}

/// Lookup table for city names.
pub fn city_lookup() -> CanonicalLookup {
    CanonicalLookup::new(CITY_SYNONYMS.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_variants_collapse_to_one_spelling() {
        let lookup = region_lookup();
        for raw in ["Московская обл", "московская ОБЛ.", "Моск. обл."] {
            assert_eq!(lookup.resolve(raw), "Московская область");
        }
    }

    #[test]
    fn canonical_and_unknown_names_pass_through() {
        let lookup = region_lookup();
        assert_eq!(lookup.resolve("Калужская область"), "Калужская область");
        // Already-canonical names are not keys and stay untouched.
        assert_eq!(lookup.resolve("Московская область"), "Московская область");
    }

    #[test]
    fn city_lookup_fixes_casing_through_synonyms() {
        let lookup = city_lookup();
        assert_eq!(lookup.resolve("ростов-на-дону"), "Ростов-на-Дону");
        assert_eq!(lookup.resolve("спб"), "Санкт-Петербург");
    }
}
