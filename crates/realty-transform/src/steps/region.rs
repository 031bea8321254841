//! Region and city canonicalization step.

use anyhow::Result;
use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};

use realty_model::CanonicalLookup;

use crate::context::FeatureContext;
use crate::data_utils::any_to_string;
use crate::pipeline::{FeatureStep, PipelineState};

pub const REGION_COLUMN: &str = "region";
pub const CITY_COLUMN: &str = "city";

/// Rewrites `region` and `city` through the canonical lookup tables.
/// Unknown names pass through unchanged.
pub struct RegionStep;

impl FeatureStep for RegionStep {
    fn apply(
        &self,
        df: &mut DataFrame,
        ctx: &FeatureContext<'_>,
        state: &mut PipelineState,
    ) -> Result<()> {
        let mut written = Vec::new();
        for (name, lookup) in [(REGION_COLUMN, ctx.regions), (CITY_COLUMN, ctx.cities)] {
            if df.column(name).is_err() {
                tracing::debug!(column = name, "name column absent, skipped");
                continue;
            }
            let rewritten = canonicalize_column(df, name, lookup)?;
            if rewritten > 0 {
                tracing::info!(column = name, rewritten, "canonicalized names");
            }
            written.push(name.to_string());
        }
        state.record(self.step_name(), written);
        Ok(())
    }

    fn step_name(&self) -> &str {
        "region"
    }
}

fn canonicalize_column(
    df: &mut DataFrame,
    name: &str,
    lookup: &CanonicalLookup,
) -> Result<usize> {
    let mut rewritten = 0usize;
    let values = {
        let column = df.column(name)?;
        (0..df.height())
            .map(|idx| {
                let raw = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
                let resolved = lookup.resolve(&raw).to_string();
                if resolved != raw {
                    rewritten += 1;
                }
                resolved
            })
            .collect::<Vec<_>>()
    };
    df.with_column(Series::new(name.into(), values))?;
    Ok(rewritten)
}
