//! Ordered feature-step pipeline.
//!
//! Each step implements the [`FeatureStep`] trait and is executed in
//! order against the listings frame. Steps are independent column
//! rewrites; [`PipelineState`] collects what each step did for the run
//! summary.
//!
//! # Default order
//!
//! 1. **floor** — canonical floor + category (runs first so it sees raw
//!    missing markers)
//! 2. **fill-categorical** — sentinel for empty categorical cells
//! 3. **region** — canonical region/city spellings
//! 4. **indicators** — POI and metro flags
//! 5. **economic-join** — per-region statistics columns

use anyhow::Result;
use polars::prelude::DataFrame;

use crate::context::FeatureContext;
use crate::steps::{
    EconomicJoinStep, FillCategoricalStep, FloorStep, IndicatorStep, RegionStep,
};

/// A single transformation in the feature pipeline.
pub trait FeatureStep: Send + Sync {
    /// Apply this step to the listings frame, in place.
    fn apply(
        &self,
        df: &mut DataFrame,
        ctx: &FeatureContext<'_>,
        state: &mut PipelineState,
    ) -> Result<()>;

    /// Stable step name used in logs and the run summary.
    fn step_name(&self) -> &str;

    /// Whether this step should be skipped for this run.
    fn should_skip(&self, _ctx: &FeatureContext<'_>) -> bool {
        false
    }
}

/// What one step did during a run.
#[derive(Debug, Clone)]
pub struct StepReport {
    pub step: String,
    /// Columns the step wrote (created or rewritten).
    pub columns: Vec<String>,
    pub skipped: bool,
}

/// Mutable state threaded through the pipeline.
#[derive(Debug, Default)]
pub struct PipelineState {
    pub reports: Vec<StepReport>,
    /// Rows whose region had no economic record.
    pub rows_missing_economic: usize,
}

impl PipelineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, step: &str, columns: Vec<String>) {
        self.reports.push(StepReport {
            step: step.to_string(),
            columns,
            skipped: false,
        });
    }

    pub fn record_skipped(&mut self, step: &str) {
        self.reports.push(StepReport {
            step: step.to_string(),
            columns: Vec::new(),
            skipped: true,
        });
    }
}

/// An ordered pipeline of feature steps.
pub struct FeaturePipeline {
    steps: Vec<Box<dyn FeatureStep>>,
}

impl Default for FeaturePipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl FeaturePipeline {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    #[must_use]
    pub fn add_step(mut self, step: Box<dyn FeatureStep>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.step_name()).collect()
    }

    /// Execute all steps in order, collecting per-step reports.
    pub fn execute(
        &self,
        df: &mut DataFrame,
        ctx: &FeatureContext<'_>,
    ) -> Result<PipelineState> {
        let mut state = PipelineState::new();
        for step in &self.steps {
            let name = step.step_name();
            if step.should_skip(ctx) {
                tracing::debug!(step = name, "step skipped");
                state.record_skipped(name);
                continue;
            }
            let span = tracing::info_span!("feature_step", step = name);
            let _guard = span.enter();
            step.apply(df, ctx, &mut state)?;
            tracing::info!(step = name, rows = df.height(), "step applied");
        }
        Ok(state)
    }
}

/// The standard pipeline in its documented order.
pub fn build_default_pipeline() -> FeaturePipeline {
    FeaturePipeline::new()
        .add_step(Box::new(FloorStep))
        .add_step(Box::new(FillCategoricalStep))
        .add_step(Box::new(RegionStep))
        .add_step(Box::new(IndicatorStep))
        .add_step(Box::new(EconomicJoinStep))
}
