//! Floor-string normalization.
//!
//! The `floor` field is human-entered and wildly irregular: plain numbers
//! ("3", "5.0"), descriptive Cyrillic terms ("подвал", "цоколь 1"),
//! ranges ("2-5", "1-Б"), and multi-value lists ("1,2,3"). Two
//! independent normalizations are derived from it:
//!
//! - [`parse_floor`] — a canonical numeric floor (or the `"nan"`
//!   sentinel, or an explicit parse-miss);
//! - [`parse_floor_cat`] — a small closed set of category labels.
//!
//! Both are ordered rule chains evaluated top to bottom, first match
//! wins. The order is load-bearing: basement keywords must be seen
//! before digit extraction, and range patterns before the `+` check.

use realty_model::{CanonicalFloor, FloorCategory, FloorValue};

use crate::data_utils::parse_f64;

/// Normalizes a raw floor value to a canonical numeric floor.
///
/// Returns `None` on a parse-miss: text with no extractable digit run
/// (and non-finite numerics, which have no integer floor). Callers decide
/// how a miss surfaces downstream; the pipeline writes a null cell.
pub fn parse_floor(value: &FloorValue) -> Option<CanonicalFloor> {
    match value {
        FloorValue::Missing => Some(CanonicalFloor::Missing),
        FloorValue::Number(n) if n.is_nan() => Some(CanonicalFloor::Missing),
        FloorValue::Number(n) if n.is_infinite() => None,
        FloorValue::Number(n) => Some(CanonicalFloor::Level(*n as i64)),
        FloorValue::Text(text) => {
            if let Some(numeric) = parse_f64(text).filter(|n| n.is_finite()) {
                // Fractional floors truncate toward zero: "5.9" is floor 5.
                return Some(CanonicalFloor::Level(numeric as i64));
            }
            // The keyword scan is case-sensitive and runs before the digit
            // search, so "подвал" without digits is still a parse-miss.
            let sign = if text.contains("подвал") || text.contains("цоколь") {
                -1
            } else {
                1
            };
            first_digit_run(text).map(|run| CanonicalFloor::Level(run * sign))
        }
    }
}

/// Classifies a raw floor value into a category label.
pub fn parse_floor_cat(value: &FloorValue) -> FloorCategory {
    match value {
        FloorValue::Missing => FloorCategory::Missing,
        FloorValue::Number(n) if n.is_nan() => FloorCategory::Missing,
        // Bare numbers run through the same level bands as digit-bearing
        // text, so "5" and 5.0 land in the same bucket.
        FloorValue::Number(n) => classify_level(*n as i64),
        FloorValue::Text(text) => categorize_text(text),
    }
}

fn categorize_text(text: &str) -> FloorCategory {
    let segments = text
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .count();
    if segments > 1 {
        return FloorCategory::Many;
    }
    if let Some(range) = match_range(text) {
        return range;
    }
    if text.contains('+') {
        return FloorCategory::Many;
    }
    let lowered = text.to_lowercase();
    if lowered.contains("подва") || lowered.contains("цоколь") {
        return FloorCategory::Underfloor;
    }
    if lowered.contains("антресоль") || lowered.contains("чердак") || lowered.contains("мансарда") {
        return FloorCategory::Outside;
    }
    if lowered.contains("тех") {
        return FloorCategory::Tech;
    }
    match first_signed_digit_run(text) {
        Some(level) => classify_level(level),
        None => FloorCategory::Another,
    }
}

/// Matches a leading range expression: one ASCII digit, optional
/// whitespace, a hyphen, optional whitespace, then either another digit
/// ("2-5" → many) or any other character ("1-Б" → the part before the
/// first hyphen as a literal label).
fn match_range(text: &str) -> Option<FloorCategory> {
    let mut chars = text.chars().peekable();
    if !chars.next().is_some_and(|ch| ch.is_ascii_digit()) {
        return None;
    }
    while chars.peek().is_some_and(|ch| ch.is_whitespace()) {
        chars.next();
    }
    if chars.next() != Some('-') {
        return None;
    }
    while chars.peek().is_some_and(|ch| ch.is_whitespace()) {
        chars.next();
    }
    match chars.next() {
        Some(ch) if ch.is_ascii_digit() => Some(FloorCategory::Many),
        Some(_) => {
            let start = text.split('-').next().unwrap_or_default().trim();
            Some(FloorCategory::RangeStart(start.to_string()))
        }
        None => None,
    }
}

/// First maximal run of ASCII digits, parsed as an integer.
fn first_digit_run(text: &str) -> Option<i64> {
    digit_run_bounds(text).and_then(|(start, end)| text[start..end].parse::<i64>().ok())
}

/// Like [`first_digit_run`], but a `-` immediately before the run negates
/// it, so "-3" classifies below ground.
fn first_signed_digit_run(text: &str) -> Option<i64> {
    let (start, end) = digit_run_bounds(text)?;
    let run = text[start..end].parse::<i64>().ok()?;
    if start > 0 && text.as_bytes()[start - 1] == b'-' {
        Some(-run)
    } else {
        Some(run)
    }
}

fn digit_run_bounds(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx].is_ascii_digit() {
            let start = idx;
            while idx < bytes.len() && bytes[idx].is_ascii_digit() {
                idx += 1;
            }
            return Some((start, idx));
        }
        idx += 1;
    }
    None
}

fn classify_level(level: i64) -> FloorCategory {
    if level > 10 {
        FloorCategory::VeryHigh
    } else if level > 2 {
        FloorCategory::High
    } else if level < 0 {
        FloorCategory::Underfloor
    } else {
        FloorCategory::Ground
    }
}
