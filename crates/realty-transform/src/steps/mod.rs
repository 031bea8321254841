//! Feature steps, one module per feature family.

pub mod categorical;
pub mod economic;
pub mod floor;
pub mod indicators;
pub mod region;

pub use categorical::{CATEGORICAL_COLUMNS, FillCategoricalStep};
pub use economic::{AVG_SALARY_COLUMN, EconomicJoinStep, GRP_COLUMN, POPULATION_COLUMN};
pub use floor::{FLOOR_CAT_COLUMN, FLOOR_COLUMN, FloorStep};
pub use indicators::{
    IndicatorStep, METRO_DISTANCE_COLUMN, METRO_FLAG_COLUMN, POI_FLAG_COLUMNS,
};
pub use region::{CITY_COLUMN, REGION_COLUMN, RegionStep};
