use std::collections::HashMap;

/// Case-insensitive mapping from raw names to canonical spellings.
///
/// Keys are folded with Unicode uppercasing because the lookup tables
/// hold Cyrillic region and city names.
#[derive(Debug, Clone, Default)]
pub struct CanonicalLookup {
    map: HashMap<String, String>,
}

impl CanonicalLookup {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = HashMap::new();
        for (raw, canonical) in entries {
            map.entry(fold_key(raw.as_ref()))
                .or_insert_with(|| canonical.into());
        }
        Self { map }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(&fold_key(name)).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&fold_key(name))
    }

    /// Canonical spelling for `name`, or `name` unchanged when unknown.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name.trim()).unwrap_or(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn fold_key(name: &str) -> String {
    name.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup() -> CanonicalLookup {
        CanonicalLookup::new([
            ("Московская обл", "Московская область"),
            ("СПб", "Санкт-Петербург"),
        ])
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        let lookup = lookup();
        assert_eq!(lookup.get("московская ОБЛ"), Some("Московская область"));
        assert_eq!(lookup.get("  спб  "), Some("Санкт-Петербург"));
        assert!(lookup.contains("СпБ"));
    }

    #[test]
    fn resolve_passes_unknown_names_through() {
        let lookup = lookup();
        assert_eq!(lookup.resolve("Татарстан"), "Татарстан");
        assert_eq!(lookup.resolve("спб"), "Санкт-Петербург");
    }

    #[test]
    fn first_entry_wins_on_duplicate_keys() {
        let lookup = CanonicalLookup::new([("спб", "Санкт-Петербург"), ("СПБ", "Питер")]);
        assert_eq!(lookup.len(), 1);
        assert_eq!(lookup.get("СПб"), Some("Санкт-Петербург"));
    }
}
