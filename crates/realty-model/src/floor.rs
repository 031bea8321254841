//! Value types for the floor-normalization stage.

use std::fmt;

/// Raw content of a `floor` cell before normalization.
///
/// Listing data stores floors as free text ("3", "подвал", "1,2"), as
/// plain numbers, or not at all. A numeric NaN is treated as missing,
/// matching how the upstream data exports encode absent values.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum FloorValue {
    Number(f64),
    Text(String),
    Missing,
}

impl FloorValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::Number(n) => n.is_nan(),
            Self::Text(_) => false,
        }
    }
}

/// Canonical numeric floor.
///
/// Rendered as a decimal string (`"3"`, `"-1"`) or the `"nan"` sentinel
/// for missing inputs. The parse-miss case (text with no extractable
/// digits) is represented by the surrounding `Option`, not by a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CanonicalFloor {
    Level(i64),
    Missing,
}

impl fmt::Display for CanonicalFloor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level(level) => write!(f, "{level}"),
            Self::Missing => f.write_str("nan"),
        }
    }
}

/// Categorical floor label.
///
/// All variants except `RangeStart` form a closed label set. `RangeStart`
/// carries the leading segment of a range expression like "1-Б" and is
/// intentionally open-ended.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum FloorCategory {
    Many,
    Underfloor,
    Outside,
    Tech,
    VeryHigh,
    High,
    Ground,
    Another,
    Missing,
    RangeStart(String),
}

impl FloorCategory {
    pub fn label(&self) -> &str {
        match self {
            Self::Many => "many",
            Self::Underfloor => "underfloor",
            Self::Outside => "outside",
            Self::Tech => "tech",
            Self::VeryHigh => "very high",
            Self::High => "high",
            Self::Ground => "ground",
            Self::Another => "another",
            Self::Missing => "nan",
            Self::RangeStart(start) => start,
        }
    }

    pub fn is_open_ended(&self) -> bool {
        matches!(self, Self::RangeStart(_))
    }
}

impl fmt::Display for FloorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
