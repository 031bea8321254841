//! Economic-statistics join step.

use anyhow::Result;
use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};

use crate::context::FeatureContext;
use crate::data_utils::any_to_string;
use crate::pipeline::{FeatureStep, PipelineState};
use crate::steps::region::REGION_COLUMN;

pub const AVG_SALARY_COLUMN: &str = "reg_avg_salary";
pub const POPULATION_COLUMN: &str = "reg_population";
pub const GRP_COLUMN: &str = "reg_grp";

/// Left-joins per-region economic aggregates onto the listings frame.
///
/// Runs after region canonicalization so the lookup keys on canonical
/// spellings. Rows whose region has no record get null cells.
pub struct EconomicJoinStep;

impl FeatureStep for EconomicJoinStep {
    fn apply(
        &self,
        df: &mut DataFrame,
        ctx: &FeatureContext<'_>,
        state: &mut PipelineState,
    ) -> Result<()> {
        let Some(table) = ctx.economic else {
            state.record_skipped(self.step_name());
            return Ok(());
        };
        if df.column(REGION_COLUMN).is_err() {
            tracing::warn!(
                column = REGION_COLUMN,
                "region column absent, economic join skipped"
            );
            state.record_skipped(self.step_name());
            return Ok(());
        }

        let mut salaries: Vec<Option<f64>> = Vec::with_capacity(df.height());
        let mut populations: Vec<Option<i64>> = Vec::with_capacity(df.height());
        let mut grps: Vec<Option<f64>> = Vec::with_capacity(df.height());
        let mut missing = 0usize;
        {
            let column = df.column(REGION_COLUMN)?;
            for idx in 0..df.height() {
                let region = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
                match table.get(&region) {
                    Some(record) => {
                        salaries.push(record.avg_salary);
                        populations.push(record.population);
                        grps.push(record.grp);
                    }
                    None => {
                        missing += 1;
                        salaries.push(None);
                        populations.push(None);
                        grps.push(None);
                    }
                }
            }
        }

        if missing > 0 {
            tracing::warn!(rows = missing, "rows without an economic record");
        }
        state.rows_missing_economic += missing;

        df.with_column(Series::new(AVG_SALARY_COLUMN.into(), salaries))?;
        df.with_column(Series::new(POPULATION_COLUMN.into(), populations))?;
        df.with_column(Series::new(GRP_COLUMN.into(), grps))?;
        state.record(
            self.step_name(),
            vec![
                AVG_SALARY_COLUMN.to_string(),
                POPULATION_COLUMN.to_string(),
                GRP_COLUMN.to_string(),
            ],
        );
        Ok(())
    }

    fn step_name(&self) -> &str {
        "economic-join"
    }

    fn should_skip(&self, ctx: &FeatureContext<'_>) -> bool {
        !ctx.options.join_economic || ctx.economic.is_none()
    }
}
