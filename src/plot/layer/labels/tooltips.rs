//! Layer tooltip builder

use super::LinesSpec;
use crate::plot::{OptionMap, OptionValue};

const TITLE: &str = "title";
const TOOLTIP_ANCHOR: &str = "tooltip_anchor";
const TOOLTIP_MIN_WIDTH: &str = "tooltip_min_width";
const DISABLE_SPLITTING: &str = "disable_splitting";

/// Tooltip content and placement of a layer
///
/// Uses the same line template and format syntax as
/// [`LayerLabels`](super::LayerLabels).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerTooltips {
    spec: LinesSpec,
    hidden: bool,
}

/// Tooltips that are never shown
pub fn tooltips_none() -> LayerTooltips {
    LayerTooltips {
        spec: LinesSpec::default(),
        hidden: true,
    }
}

impl LayerTooltips {
    pub fn new<I, S>(variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            spec: LinesSpec::new(variables),
            hidden: false,
        }
    }

    fn with_spec(&self, spec: LinesSpec) -> Self {
        Self {
            spec,
            hidden: self.hidden,
        }
    }

    pub fn format(&self, field: &str, format: &str) -> Self {
        self.with_spec(self.spec.format(field, format))
    }

    pub fn line(&self, template: &str) -> Self {
        self.with_spec(self.spec.line(template))
    }

    /// Title line template, shown above the other lines
    pub fn title(&self, template: &str) -> Self {
        self.with_spec(self.spec.assign(TITLE, template))
    }

    /// Fixed placement such as "top_left" or "bottom_center"
    pub fn anchor(&self, value: &str) -> Self {
        self.with_spec(self.spec.assign(TOOLTIP_ANCHOR, value))
    }

    pub fn min_width(&self, value: f64) -> Self {
        self.with_spec(self.spec.assign(TOOLTIP_MIN_WIDTH, value))
    }

    /// Show side tooltips (axis values, ...) inside the general tooltip
    pub fn disable_splitting(&self) -> Self {
        self.with_spec(self.spec.assign(DISABLE_SPLITTING, true))
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn options(&self) -> &OptionMap {
        self.spec.options()
    }

    /// Value stored under the layer's `tooltips` key
    pub fn to_value(&self) -> OptionValue {
        if self.hidden {
            OptionValue::from("none")
        } else {
            OptionValue::Map(self.spec.options().clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltips_none() {
        assert_eq!(tooltips_none().to_value(), OptionValue::from("none"));
        assert!(tooltips_none().is_hidden());
    }

    #[test]
    fn test_tooltip_options() {
        let tooltips = LayerTooltips::default()
            .title("@model")
            .line("^y")
            .line("@{engine size}")
            .anchor("top_right")
            .min_width(120.0)
            .disable_splitting();

        let value = tooltips.to_value();
        let map = value.as_map().unwrap();
        assert_eq!(
            map.keys().collect::<Vec<_>>(),
            vec![
                "title",
                "lines",
                "tooltip_anchor",
                "tooltip_min_width",
                "disable_splitting"
            ]
        );
        assert_eq!(
            map.get("lines"),
            Some(&OptionValue::from(vec!["^y", "@{engine size}"]))
        );
    }
}
