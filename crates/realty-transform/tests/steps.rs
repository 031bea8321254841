//! Step-level edge cases.

use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};

use realty_model::{CanonicalLookup, FeatureOptions};
use realty_transform::FeatureContext;
use realty_transform::data_utils::any_to_string;
use realty_transform::pipeline::{FeatureStep, PipelineState};
use realty_transform::steps::{FillCategoricalStep, FloorStep, IndicatorStep};

fn string_cells(df: &DataFrame, name: &str) -> Vec<String> {
    let column = df.column(name).unwrap();
    (0..df.height())
        .map(|idx| any_to_string(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect()
}

#[test]
fn indicator_thresholds_are_inclusive_at_the_boundary() {
    let options = FeatureOptions::default()
        .with_poi_min_count(3)
        .with_metro_distance_km(2.0);
    let regions = CanonicalLookup::default();
    let cities = CanonicalLookup::default();
    let ctx = FeatureContext::new(&options, &regions, &cities);

    let mut df = DataFrame::new(vec![
        Series::new("osm_amenity_points_in_0.001".into(), [2i64, 3, 4]).into(),
        Series::new("osm_subway_closest_dist".into(), [2.0f64, 2.01, 0.0]).into(),
    ])
    .unwrap();

    let mut state = PipelineState::new();
    IndicatorStep.apply(&mut df, &ctx, &mut state).unwrap();

    assert_eq!(string_cells(&df, "osm_amenity_flag"), vec!["0", "1", "1"]);
    assert_eq!(string_cells(&df, "metro_nearby"), vec!["1", "0", "1"]);
    // Source columns for the other flags are absent; no flag is written.
    assert!(df.column("osm_building_flag").is_err());
}

#[test]
fn fill_step_touches_only_empty_cells() {
    let options = FeatureOptions::default();
    let regions = CanonicalLookup::default();
    let cities = CanonicalLookup::default();
    let ctx = FeatureContext::new(&options, &regions, &cities);

    let mut df = DataFrame::new(vec![
        Series::new("region".into(), [Some("Москва"), Some("  "), None]).into(),
        Series::new("price".into(), [1i64, 2, 3]).into(),
    ])
    .unwrap();

    let mut state = PipelineState::new();
    FillCategoricalStep.apply(&mut df, &ctx, &mut state).unwrap();

    assert_eq!(
        string_cells(&df, "region"),
        vec!["Москва", "missing", "missing"]
    );
    assert_eq!(string_cells(&df, "price"), vec!["1", "2", "3"]);
}

#[test]
fn floor_step_requires_the_floor_column() {
    let options = FeatureOptions::default();
    let regions = CanonicalLookup::default();
    let cities = CanonicalLookup::default();
    let ctx = FeatureContext::new(&options, &regions, &cities);

    let mut df =
        DataFrame::new(vec![Series::new("region".into(), ["Москва"]).into()]).unwrap();
    let mut state = PipelineState::new();
    let err = FloorStep.apply(&mut df, &ctx, &mut state).unwrap_err();
    assert!(err.to_string().contains("floor"));
}

#[test]
fn floor_step_rejects_structural_mismatch() {
    let options = FeatureOptions::default();
    let regions = CanonicalLookup::default();
    let cities = CanonicalLookup::default();
    let ctx = FeatureContext::new(&options, &regions, &cities);

    let mut df =
        DataFrame::new(vec![Series::new("floor".into(), [true, false]).into()]).unwrap();
    let mut state = PipelineState::new();
    let err = FloorStep.apply(&mut df, &ctx, &mut state).unwrap_err();
    assert!(
        err.to_string().contains("unsupported cell"),
        "unexpected error: {err}"
    );
}

#[test]
fn numeric_floor_columns_classify_by_level_bands() {
    let options = FeatureOptions::default();
    let regions = CanonicalLookup::default();
    let cities = CanonicalLookup::default();
    let ctx = FeatureContext::new(&options, &regions, &cities);

    let mut df = DataFrame::new(vec![
        Series::new("floor".into(), [Some(5.9f64), Some(-1.0), None]).into(),
    ])
    .unwrap();
    let mut state = PipelineState::new();
    FloorStep.apply(&mut df, &ctx, &mut state).unwrap();

    assert_eq!(string_cells(&df, "floor"), vec!["5", "-1", "nan"]);
    assert_eq!(
        string_cells(&df, "floor_cat"),
        vec!["high", "underfloor", "nan"]
    );
}
