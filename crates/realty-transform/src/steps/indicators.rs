//! POI and metro indicator flags.
//!
//! Each flag is a 0/1 column derived by a threshold rule from an
//! OpenStreetMap aggregate: point-of-interest counts within a radius,
//! and the distance to the nearest metro station. A null source cell
//! yields flag 0 (no evidence of the amenity).

use anyhow::Result;
use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};

use crate::context::FeatureContext;
use crate::data_utils::any_to_f64;
use crate::pipeline::{FeatureStep, PipelineState};

/// POI count columns and the flags derived from them.
pub const POI_FLAG_COLUMNS: &[(&str, &str)] = &[
    ("osm_amenity_points_in_0.001", "osm_amenity_flag"),
    ("osm_building_points_in_0.001", "osm_building_flag"),
    ("osm_historic_points_in_0.005", "osm_historic_flag"),
];

pub const METRO_DISTANCE_COLUMN: &str = "osm_subway_closest_dist";
pub const METRO_FLAG_COLUMN: &str = "metro_nearby";

pub struct IndicatorStep;

impl FeatureStep for IndicatorStep {
    fn apply(
        &self,
        df: &mut DataFrame,
        ctx: &FeatureContext<'_>,
        state: &mut PipelineState,
    ) -> Result<()> {
        let mut written = Vec::new();
        let min_count = ctx.options.poi_min_count as f64;
        for &(source, flag) in POI_FLAG_COLUMNS {
            if df.column(source).is_err() {
                tracing::debug!(column = source, "POI column absent, skipped");
                continue;
            }
            let flags = threshold_flags(df, source, |count| count >= min_count)?;
            df.with_column(Series::new(flag.into(), flags))?;
            written.push(flag.to_string());
        }

        if df.column(METRO_DISTANCE_COLUMN).is_ok() {
            let max_km = ctx.options.metro_distance_km;
            let flags = threshold_flags(df, METRO_DISTANCE_COLUMN, |dist| dist <= max_km)?;
            df.with_column(Series::new(METRO_FLAG_COLUMN.into(), flags))?;
            written.push(METRO_FLAG_COLUMN.to_string());
        } else {
            tracing::debug!(column = METRO_DISTANCE_COLUMN, "metro column absent, skipped");
        }

        state.record(self.step_name(), written);
        Ok(())
    }

    fn step_name(&self) -> &str {
        "indicators"
    }
}

fn threshold_flags(
    df: &DataFrame,
    source: &str,
    predicate: impl Fn(f64) -> bool,
) -> Result<Vec<i32>> {
    let column = df.column(source)?;
    let flags = (0..df.height())
        .map(|idx| {
            any_to_f64(column.get(idx).unwrap_or(AnyValue::Null))
                .map_or(0, |value| i32::from(predicate(value)))
        })
        .collect();
    Ok(flags)
}
