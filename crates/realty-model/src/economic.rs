use std::collections::HashMap;

/// Per-region economic aggregates merged onto listings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EconomicRecord {
    /// Canonical region name as it appears in the statistics export.
    pub region: String,
    /// Average monthly salary, rubles.
    pub avg_salary: Option<f64>,
    /// Resident population, persons.
    pub population: Option<i64>,
    /// Gross regional product, millions of rubles.
    pub grp: Option<f64>,
}

/// Region-keyed table of [`EconomicRecord`]s.
///
/// Lookups fold the key with Unicode uppercasing so that canonicalized
/// listing regions match the statistics export regardless of casing.
#[derive(Debug, Clone, Default)]
pub struct EconomicTable {
    records: HashMap<String, EconomicRecord>,
}

impl EconomicTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any previous record for the same region.
    pub fn insert(&mut self, record: EconomicRecord) {
        self.records
            .insert(record.region.trim().to_uppercase(), record);
    }

    pub fn get(&self, region: &str) -> Option<&EconomicRecord> {
        self.records.get(&region.trim().to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<EconomicRecord> for EconomicTable {
    fn from_iter<I: IntoIterator<Item = EconomicRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(region: &str, salary: f64) -> EconomicRecord {
        EconomicRecord {
            region: region.to_string(),
            avg_salary: Some(salary),
            population: Some(1_000_000),
            grp: None,
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table: EconomicTable = [record("Москва", 95_000.0)].into_iter().collect();
        assert!(table.get("МОСКВА").is_some());
        assert!(table.get(" москва ").is_some());
        assert!(table.get("Казань").is_none());
    }

    #[test]
    fn later_records_replace_earlier_ones() {
        let table: EconomicTable = [record("Москва", 90_000.0), record("москва", 95_000.0)]
            .into_iter()
            .collect();
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get("Москва").and_then(|r| r.avg_salary),
            Some(95_000.0)
        );
    }
}
