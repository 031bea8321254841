//! DataFrame value extraction helpers.

use anyhow::Result;
use polars::prelude::{AnyValue, DataFrame, NamedFrom, Series};

use realty_model::{FloorValue, RealtyError};

/// Converts a polars AnyValue to a String representation.
/// Returns empty string for Null, properly formats numeric types.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Converts an AnyValue to f64, returning None for non-numeric or null values.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Formats a floating-point number as a string, integral floats without
/// a fractional part.
pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Extracts a [`FloorValue`] from a raw cell.
///
/// Only null, string, and numeric cells are foreseen by the data model;
/// anything else (boolean, temporal, nested) is a structural mismatch and
/// is rejected so bad exports surface instead of silently defaulting.
pub fn floor_value_from_any(
    value: AnyValue<'_>,
    column: &str,
    row: usize,
) -> realty_model::Result<FloorValue> {
    match value {
        AnyValue::Null => Ok(FloorValue::Missing),
        AnyValue::String(s) => Ok(FloorValue::text(s)),
        AnyValue::StringOwned(s) => Ok(FloorValue::text(s.as_str())),
        AnyValue::Int8(_)
        | AnyValue::Int16(_)
        | AnyValue::Int32(_)
        | AnyValue::Int64(_)
        | AnyValue::UInt8(_)
        | AnyValue::UInt16(_)
        | AnyValue::UInt32(_)
        | AnyValue::UInt64(_)
        | AnyValue::Float32(_)
        | AnyValue::Float64(_) => {
            let numeric = any_to_f64(value).unwrap_or(f64::NAN);
            Ok(FloorValue::Number(numeric))
        }
        other => Err(RealtyError::UnsupportedCell {
            column: column.to_string(),
            row,
            dtype: other.dtype().to_string(),
        }),
    }
}

/// Replaces empty cells of a string column with `fill`.
pub fn fill_string_column(df: &mut DataFrame, name: &str, fill: &str) -> Result<usize> {
    let mut values = {
        let column = df.column(name)?;
        (0..df.height())
            .map(|idx| any_to_string(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect::<Vec<_>>()
    };
    let mut filled = 0usize;
    for value in &mut values {
        if value.trim().is_empty() {
            *value = fill.to_string();
            filled += 1;
        }
    }
    df.with_column(Series::new(name.into(), values))?;
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_to_string_formats_floats_without_trailing_zeros() {
        assert_eq!(any_to_string(AnyValue::Float64(10.0)), "10");
        assert_eq!(any_to_string(AnyValue::Float64(10.5)), "10.5");
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn floor_value_from_any_maps_foreseen_shapes() {
        assert_eq!(
            floor_value_from_any(AnyValue::Null, "floor", 0).unwrap(),
            FloorValue::Missing
        );
        assert_eq!(
            floor_value_from_any(AnyValue::String("подвал"), "floor", 0).unwrap(),
            FloorValue::text("подвал")
        );
        assert_eq!(
            floor_value_from_any(AnyValue::Int64(4), "floor", 0).unwrap(),
            FloorValue::Number(4.0)
        );
    }

    #[test]
    fn floor_value_from_any_rejects_structural_mismatch() {
        let err = floor_value_from_any(AnyValue::Boolean(true), "floor", 7).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("row 7"), "unexpected message: {message}");
    }
}
