//! Floor normalization step.

use anyhow::Result;
use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};

use realty_model::RealtyError;

use crate::context::FeatureContext;
use crate::data_utils::floor_value_from_any;
use crate::normalization::floor::{parse_floor, parse_floor_cat};
use crate::pipeline::{FeatureStep, PipelineState};

pub const FLOOR_COLUMN: &str = "floor";
pub const FLOOR_CAT_COLUMN: &str = "floor_cat";

/// Rewrites `floor` to its canonical string form and writes the
/// `floor_cat` label column. Parse misses become null cells.
pub struct FloorStep;

impl FeatureStep for FloorStep {
    fn apply(
        &self,
        df: &mut DataFrame,
        _ctx: &FeatureContext<'_>,
        state: &mut PipelineState,
    ) -> Result<()> {
        let (canonical, categories) = {
            let column = df.column(FLOOR_COLUMN).map_err(|_| RealtyError::MissingColumn {
                column: FLOOR_COLUMN.to_string(),
            })?;
            let mut canonical: Vec<Option<String>> = Vec::with_capacity(df.height());
            let mut categories: Vec<String> = Vec::with_capacity(df.height());
            for idx in 0..df.height() {
                let raw = column.get(idx).unwrap_or(AnyValue::Null);
                let value = floor_value_from_any(raw, FLOOR_COLUMN, idx)?;
                canonical.push(parse_floor(&value).map(|floor| floor.to_string()));
                categories.push(parse_floor_cat(&value).label().to_string());
            }
            (canonical, categories)
        };

        let misses = canonical.iter().filter(|cell| cell.is_none()).count();
        if misses > 0 {
            tracing::warn!(rows = misses, "floor values with no extractable digits");
        }

        df.with_column(Series::new(FLOOR_COLUMN.into(), canonical))?;
        df.with_column(Series::new(FLOOR_CAT_COLUMN.into(), categories))?;
        state.record(
            self.step_name(),
            vec![FLOOR_COLUMN.to_string(), FLOOR_CAT_COLUMN.to_string()],
        );
        Ok(())
    }

    fn step_name(&self) -> &str {
        "floor"
    }
}
