use realty_model::{CanonicalLookup, EconomicTable, FeatureOptions};

/// Shared read-only context for feature steps.
pub struct FeatureContext<'a> {
    /// Run configuration.
    pub options: &'a FeatureOptions,
    /// Canonical region spellings.
    pub regions: &'a CanonicalLookup,
    /// Canonical city spellings.
    pub cities: &'a CanonicalLookup,
    /// Per-region economic aggregates, when supplied.
    pub economic: Option<&'a EconomicTable>,
}

impl<'a> FeatureContext<'a> {
    pub fn new(
        options: &'a FeatureOptions,
        regions: &'a CanonicalLookup,
        cities: &'a CanonicalLookup,
    ) -> Self {
        Self {
            options,
            regions,
            cities,
            economic: None,
        }
    }

    #[must_use]
    pub fn with_economic(mut self, table: &'a EconomicTable) -> Self {
        self.economic = Some(table);
        self
    }
}
