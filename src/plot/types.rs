//! Value types for plot specifications
//!
//! `OptionValue` is the single value type stored in every option map. The
//! visual constant types (`Color`, `LineType`, `Shape`) are closed sum types
//! that are passed through to the renderer untouched: resolving or validating
//! them is the renderer's job.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::options::OptionMap;

/// A value stored in an option map
///
/// Serialized untagged, so a spec serializes to plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Explicitly set to null (distinct from "not set")
    Null,
    Boolean(bool),
    Integer(i64),
    Number(f64),
    String(String),
    Array(Vec<OptionValue>),
    Map(OptionMap),
}

impl OptionValue {
    pub fn is_null(&self) -> bool {
        matches!(self, OptionValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            OptionValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            OptionValue::Number(n) => Some(*n),
            OptionValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[OptionValue]> {
        match self {
            OptionValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&OptionMap> {
        match self {
            OptionValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Boolean(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<f32> for OptionValue {
    fn from(value: f32) -> Self {
        OptionValue::Number(f64::from(value))
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Integer(i64::from(value))
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Integer(i64::from(value))
    }
}

impl From<usize> for OptionValue {
    fn from(value: usize) -> Self {
        OptionValue::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::String(value)
    }
}

impl From<OptionMap> for OptionValue {
    fn from(value: OptionMap) -> Self {
        OptionValue::Map(value)
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(values: Vec<T>) -> Self {
        OptionValue::Array(values.into_iter().map(Into::into).collect())
    }
}

/// Date-times are passed as milliseconds since the Unix epoch.
impl<Tz: TimeZone> From<DateTime<Tz>> for OptionValue {
    fn from(value: DateTime<Tz>) -> Self {
        OptionValue::Integer(value.timestamp_millis())
    }
}

/// Naive date-times carry no zone and are taken as UTC.
impl From<NaiveDateTime> for OptionValue {
    fn from(value: NaiveDateTime) -> Self {
        OptionValue::Integer(value.and_utc().timestamp_millis())
    }
}

impl From<NaiveDate> for OptionValue {
    fn from(value: NaiveDate) -> Self {
        OptionValue::Integer(
            value
                .and_hms_opt(0, 0, 0)
                .map(|dt| Utc.from_utc_datetime(&dt).timestamp_millis())
                .unwrap_or_default(),
        )
    }
}

/// Color constant
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// A named color ("red", "dark_blue", ...)
    Named(String),
    /// A hex string ("#ff0000", "#ff000080")
    Hex(String),
    /// Red, green, blue in 0..=255 and alpha in 0.0..=1.0
    Rgba(u8, u8, u8, f64),
    /// Index into the renderer's palette
    PaletteIndex(u32),
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        if value.starts_with('#') {
            Color::Hex(value.to_string())
        } else {
            Color::Named(value.to_string())
        }
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Color::from(value.as_str())
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color::PaletteIndex(value)
    }
}

impl From<Color> for OptionValue {
    fn from(color: Color) -> Self {
        match color {
            Color::Named(name) => OptionValue::String(name),
            Color::Hex(hex) => OptionValue::String(hex),
            Color::Rgba(r, g, b, a) => OptionValue::String(format!("rgba({r},{g},{b},{a})")),
            Color::PaletteIndex(index) => OptionValue::Integer(i64::from(index)),
        }
    }
}

/// Line type constant
///
/// Codes: 0 = "blank", 1 = "solid", 2 = "dashed", 3 = "dotted", 4 = "dotdash",
/// 5 = "longdash", 6 = "twodash".
#[derive(Debug, Clone, PartialEq)]
pub enum LineType {
    Code(i32),
    Named(String),
    /// Up to 8 hex digits of dash/gap lengths
    Hex(String),
    /// Dash/gap lengths with an optional offset
    Pattern {
        offset: Option<f64>,
        dashes: Vec<f64>,
    },
}

impl From<i32> for LineType {
    fn from(value: i32) -> Self {
        LineType::Code(value)
    }
}

impl From<u8> for LineType {
    fn from(value: u8) -> Self {
        LineType::Code(i32::from(value))
    }
}

impl From<&str> for LineType {
    fn from(value: &str) -> Self {
        if value.chars().all(|c| c.is_ascii_hexdigit()) && !value.is_empty() {
            LineType::Hex(value.to_string())
        } else {
            LineType::Named(value.to_string())
        }
    }
}

impl From<Vec<f64>> for LineType {
    fn from(dashes: Vec<f64>) -> Self {
        LineType::Pattern {
            offset: None,
            dashes,
        }
    }
}

impl From<LineType> for OptionValue {
    fn from(linetype: LineType) -> Self {
        match linetype {
            LineType::Code(code) => OptionValue::Integer(i64::from(code)),
            LineType::Named(name) | LineType::Hex(name) => OptionValue::String(name),
            LineType::Pattern {
                offset: None,
                dashes,
            } => OptionValue::from(dashes),
            LineType::Pattern {
                offset: Some(offset),
                dashes,
            } => OptionValue::Array(vec![
                OptionValue::Number(offset),
                OptionValue::from(dashes),
            ]),
        }
    }
}

/// Point shape constant
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Code(i32),
    Named(String),
}

impl From<i32> for Shape {
    fn from(value: i32) -> Self {
        Shape::Code(value)
    }
}

impl From<u8> for Shape {
    fn from(value: u8) -> Self {
        Shape::Code(i32::from(value))
    }
}

impl From<&str> for Shape {
    fn from(value: &str) -> Self {
        Shape::Named(value.to_string())
    }
}

impl From<Shape> for OptionValue {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Code(code) => OptionValue::Integer(i64::from(code)),
            Shape::Named(name) => OptionValue::String(name),
        }
    }
}
