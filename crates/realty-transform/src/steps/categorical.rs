//! Categorical fill step.

use anyhow::Result;
use polars::prelude::DataFrame;

use crate::context::FeatureContext;
use crate::data_utils::fill_string_column;
use crate::pipeline::{FeatureStep, PipelineState};

/// Categorical columns whose empty cells receive the fill sentinel.
///
/// `floor` is deliberately not in this list: the floor step runs first
/// and must see the raw missing marker, not the sentinel text.
pub const CATEGORICAL_COLUMNS: &[&str] = &["region", "city", "street", "realty_type"];

/// Replaces empty categorical cells with the configured sentinel.
pub struct FillCategoricalStep;

impl FeatureStep for FillCategoricalStep {
    fn apply(
        &self,
        df: &mut DataFrame,
        ctx: &FeatureContext<'_>,
        state: &mut PipelineState,
    ) -> Result<()> {
        let mut written = Vec::new();
        for &name in CATEGORICAL_COLUMNS {
            if df.column(name).is_err() {
                tracing::debug!(column = name, "categorical column absent, skipped");
                continue;
            }
            let filled = fill_string_column(df, name, &ctx.options.unknown_value)?;
            if filled > 0 {
                tracing::debug!(column = name, filled, "filled empty cells");
            }
            written.push(name.to_string());
        }
        state.record(self.step_name(), written);
        Ok(())
    }

    fn step_name(&self) -> &str {
        "fill-categorical"
    }
}
