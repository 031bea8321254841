pub mod economic;
pub mod error;
pub mod floor;
pub mod lookup;
pub mod options;

pub use economic::{EconomicRecord, EconomicTable};
pub use error::{RealtyError, Result};
pub use floor::{CanonicalFloor, FloorCategory, FloorValue};
pub use lookup::CanonicalLookup;
pub use options::{FeatureOptions, UNKNOWN_VALUE};
