//! Scale specification types

use crate::plot::options::options_struct;
use crate::plot::{OptionMap, OptionValue};
use crate::{GgspecError, Result};

options_struct! {
    /// Options shared by all positional scales
    pub struct ScaleOptions {
        /// Axis or legend title
        name: String => "name",
        /// List of break values, or a map of label -> break
        breaks: OptionValue => "breaks",
        /// Labels for the breaks
        labels: OptionValue => "labels",
        /// Maximum label length; longer labels are truncated with "..."
        lablim: i64 => "lablim",
        /// Result of [`limits`](crate::plot::scale::limits) or a list of discrete values
        limits: OptionValue => "limits",
        /// `[mult]` or `[mult, add]`
        expand: Vec<f64> => "expand",
        /// Value used for missing data
        na_value: OptionValue => "na_value",
        /// Number or date/time format of the labels
        format: String => "format",
        /// "left", "right", "top", "bottom" or "both"
        position: String => "position",
    }
}

/// `expand` takes a multiplicative and an optional additive constant
pub fn check_scale_expand(expand: Option<&[f64]>) -> Result<()> {
    match expand {
        Some(values) if values.is_empty() || values.len() > 2 => {
            Err(GgspecError::InvalidArgument(format!(
                "expand must have 1 or 2 elements, got {}",
                values.len()
            )))
        }
        _ => Ok(()),
    }
}

/// A scale bound to one aesthetic
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    aesthetic: String,
    options: OptionMap,
}

impl Scale {
    /// Scale from common options plus scale-kind options
    ///
    /// Fails when `expand` has fewer than 1 or more than 2 elements.
    pub fn new(aesthetic: &str, options: ScaleOptions, other: OptionMap) -> Result<Self> {
        check_scale_expand(options.expand.as_deref())?;
        Ok(Self {
            aesthetic: aesthetic.to_string(),
            options: options.seal().merge(&other),
        })
    }

    pub fn aesthetic(&self) -> &str {
        &self.aesthetic
    }

    pub fn options(&self) -> &OptionMap {
        &self.options
    }

    /// `{"aesthetic": aes}` followed by the scale options
    pub fn to_spec(&self) -> OptionMap {
        let mut spec = OptionMap::new();
        spec.insert("aesthetic", self.aesthetic.as_str());
        spec.merge(&self.options)
    }
}
