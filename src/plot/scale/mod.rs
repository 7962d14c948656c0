//! Scale specifications
//!
//! Scales are passed to the renderer as option maps keyed by aesthetic. Only
//! structural checks happen here (`expand` length); breaks, labels and limits
//! are passed through.

mod types;

pub use types::{check_scale_expand, Scale, ScaleOptions};

use crate::plot::{OptionMap, OptionValue};
use crate::Result;

/// Lower and upper limit of a continuous scale
///
/// A missing end is kept as an explicit `null`, which the renderer reads as
/// "computed from the data". Date-times become epoch milliseconds.
pub fn limits<L, U>(lower: Option<L>, upper: Option<U>) -> OptionValue
where
    L: Into<OptionValue>,
    U: Into<OptionValue>,
{
    OptionValue::Array(vec![
        lower.map_or(OptionValue::Null, Into::into),
        upper.map_or(OptionValue::Null, Into::into),
    ])
}

fn flag(key: &str) -> OptionMap {
    let mut options = OptionMap::new();
    options.insert(key, true);
    options
}

fn time_scale(aesthetic: &str, mut options: ScaleOptions) -> Result<Scale> {
    if let Some(format) = options.format.take() {
        tracing::warn!(aesthetic, format = %format, "Time scales ignore the 'format' option");
    }
    Scale::new(aesthetic, options, flag("time"))
}

pub fn scale_x_continuous(options: ScaleOptions) -> Result<Scale> {
    Scale::new("x", options, OptionMap::new())
}

pub fn scale_y_continuous(options: ScaleOptions) -> Result<Scale> {
    Scale::new("y", options, OptionMap::new())
}

/// Positional x scale for discrete data
pub fn scale_x_discrete(options: ScaleOptions) -> Result<Scale> {
    Scale::new("x", options, flag("discrete"))
}

pub fn scale_y_discrete(options: ScaleOptions) -> Result<Scale> {
    Scale::new("y", options, flag("discrete"))
}

/// Positional x scale for date-time data (epoch milliseconds)
pub fn scale_x_datetime(options: ScaleOptions) -> Result<Scale> {
    Scale::new("x", options, flag("datetime"))
}

pub fn scale_y_datetime(options: ScaleOptions) -> Result<Scale> {
    Scale::new("y", options, flag("datetime"))
}

/// Positional x scale for durations (milliseconds)
///
/// Time scales have no `format`; one set on `options` is dropped.
pub fn scale_x_time(options: ScaleOptions) -> Result<Scale> {
    time_scale("x", options)
}

pub fn scale_y_time(options: ScaleOptions) -> Result<Scale> {
    time_scale("y", options)
}
