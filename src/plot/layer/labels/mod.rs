//! Layer annotation and tooltip builders
//!
//! Both builders are values: every transition copies the current options,
//! applies one change and returns the new value, leaving the receiver intact.
//! `formats` and `lines` accumulate in call order; scalar options are
//! overwritten by the last call.
//!
//! Line templates and formats are stored verbatim. [`template`] only inspects
//! them.

pub mod template;
mod tooltips;

pub use tooltips::{tooltips_none, LayerTooltips};

use crate::plot::{OptionMap, OptionValue};

const VARIABLES: &str = "variables";
const FORMATS: &str = "formats";
const FIELD: &str = "field";
const FORMAT: &str = "format";
const LINES: &str = "lines";
const ANNOTATION_SIZE: &str = "annotation_size";
const USE_LAYER_COLOR: &str = "use_layer_color";

/// Shared option storage of line-based builders
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct LinesSpec {
    options: OptionMap,
}

impl LinesSpec {
    pub(crate) fn new<I, S>(variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let variables: Vec<String> = variables.into_iter().map(Into::into).collect();
        let mut options = OptionMap::new();
        if !variables.is_empty() {
            options.insert(VARIABLES, variables);
        }
        Self { options }
    }

    /// Copy with `value` appended to the list under `key`
    pub(crate) fn append(&self, key: &str, value: impl Into<OptionValue>) -> Self {
        let mut items = self
            .options
            .get(key)
            .and_then(OptionValue::as_array)
            .map(<[OptionValue]>::to_vec)
            .unwrap_or_default();
        items.push(value.into());

        let mut next = self.clone();
        next.options.insert(key, OptionValue::Array(items));
        next
    }

    /// Copy with `key` set to `value`
    pub(crate) fn assign(&self, key: &str, value: impl Into<OptionValue>) -> Self {
        let mut next = self.clone();
        next.options.insert(key, value);
        next
    }

    pub(crate) fn format(&self, field: &str, format: &str) -> Self {
        let mut entry = OptionMap::new();
        entry.insert(FIELD, field).insert(FORMAT, format);
        self.append(FORMATS, entry)
    }

    pub(crate) fn line(&self, template: &str) -> Self {
        self.append(LINES, template)
    }

    pub(crate) fn options(&self) -> &OptionMap {
        &self.options
    }
}

/// Annotations drawn on bar, pie and crossbar layers
///
/// ```rust,ignore
/// let labels = LayerLabels::new(["..proppct.."])
///     .format("..proppct..", "{.1f}%")
///     .size(15);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerLabels {
    spec: LinesSpec,
}

impl LayerLabels {
    /// Labels showing `variables` with default formatting
    pub fn new<I, S>(variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            spec: LinesSpec::new(variables),
        }
    }

    /// Format for an aesthetic (`^name`) or variable (`name` or `@name`)
    ///
    /// `format` is a number format (`".2f"`), a string template (`"{.1f} %"`) or a
    /// date/time pattern (`"%d.%m.%y"`).
    pub fn format(&self, field: &str, format: &str) -> Self {
        Self {
            spec: self.spec.format(field, format),
        }
    }

    /// Append a line template
    pub fn line(&self, template: &str) -> Self {
        Self {
            spec: self.spec.line(template),
        }
    }

    /// Text size of the annotation
    pub fn size(&self, value: impl Into<OptionValue>) -> Self {
        Self {
            spec: self.spec.assign(ANNOTATION_SIZE, value),
        }
    }

    /// Use the layer's `color` for the annotation text
    pub fn inherit_color(&self) -> Self {
        Self {
            spec: self.spec.assign(USE_LAYER_COLOR, true),
        }
    }

    pub fn options(&self) -> &OptionMap {
        self.spec.options()
    }
}
