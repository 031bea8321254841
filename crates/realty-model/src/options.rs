/// Sentinel written into empty categorical cells.
pub const UNKNOWN_VALUE: &str = "missing";

/// Run configuration for the feature pipeline.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FeatureOptions {
    /// Replacement for empty categorical cells.
    pub unknown_value: String,
    /// Minimum POI count for an indicator flag to fire.
    pub poi_min_count: i64,
    /// Maximum distance to the nearest metro station, in kilometres,
    /// for the `metro_nearby` flag.
    pub metro_distance_km: f64,
    /// Whether the economic-statistics join step runs.
    pub join_economic: bool,
}

impl Default for FeatureOptions {
    fn default() -> Self {
        Self {
            unknown_value: UNKNOWN_VALUE.to_string(),
            poi_min_count: 1,
            metro_distance_km: 1.0,
            join_economic: true,
        }
    }
}

impl FeatureOptions {
    #[must_use]
    pub fn with_unknown_value(mut self, value: impl Into<String>) -> Self {
        self.unknown_value = value.into();
        self
    }

    #[must_use]
    pub fn with_poi_min_count(mut self, count: i64) -> Self {
        self.poi_min_count = count;
        self
    }

    #[must_use]
    pub fn with_metro_distance_km(mut self, km: f64) -> Self {
        self.metro_distance_km = km;
        self
    }

    #[must_use]
    pub fn with_join_economic(mut self, enable: bool) -> Self {
        self.join_economic = enable;
        self
    }
}
