//! Capability mixins shared across geometries
//!
//! Each mixin owns a fixed, disjoint set of option keys. Geometries list the
//! mixins they participate in, and the slices are merged in that order.

use crate::plot::options::options_struct;
use crate::plot::OptionMap;

options_struct! {
    /// Which color aesthetic drives the geometry's `color`
    pub struct WithColorOption {
        /// "fill", "color", "paint_a", "paint_b" or "paint_c"
        color_by: String => "color_by",
    }
}

options_struct! {
    /// Which color aesthetic drives the geometry's `fill`
    pub struct WithFillOption {
        /// "fill", "color", "paint_a", "paint_b" or "paint_c"
        fill_by: String => "fill_by",
    }
}

options_struct! {
    /// Unit of the `size` aesthetic
    pub struct WithSizeUnitOption {
        /// "x", "y", "min" or "max"
        size_unit: String => "size_unit",
    }
}

impl From<&str> for WithColorOption {
    fn from(value: &str) -> Self {
        Self::default().color_by(value)
    }
}

impl From<&str> for WithFillOption {
    fn from(value: &str) -> Self {
        Self::default().fill_by(value)
    }
}

impl From<&str> for WithSizeUnitOption {
    fn from(value: &str) -> Self {
        Self::default().size_unit(value)
    }
}

options_struct! {
    /// Text formatting parameters of text-like geometries
    pub struct TextParameters {
        label_format: String => "label_format",
        /// Text shown for missing values
        na_text: String => "na_text",
        nudge_x: f64 => "nudge_x",
        nudge_y: f64 => "nudge_y",
        /// "identity", "size", "px"
        nudge_unit: String => "nudge_unit",
        check_overlap: bool => "check_overlap",
    }
}

options_struct! {
    /// Text formatting plus label box parameters
    pub struct LabelParameters {
        label_format: String => "label_format",
        na_text: String => "na_text",
        nudge_x: f64 => "nudge_x",
        nudge_y: f64 => "nudge_y",
        nudge_unit: String => "nudge_unit",
        check_overlap: bool => "check_overlap",
        /// Space between text and label box border
        label_padding: f64 => "label_padding",
        /// Radius of rounded corners
        label_r: f64 => "label_r",
        /// Label box border width
        label_size: f64 => "label_size",
        /// Whether `alpha` also applies to the border and text
        alpha_stroke: bool => "alpha_stroke",
    }
}

options_struct! {
    /// Parameters of the repel layout
    pub struct RepelParameters {
        seed: i64 => "seed",
        max_iter: i64 => "max_iter",
        max_time: f64 => "max_time",
        /// "x", "y" or "both"
        direction: String => "direction",
        point_padding: f64 => "point_padding",
        box_padding: f64 => "box_padding",
        max_overlaps: i64 => "max_overlaps",
        min_segment_length: f64 => "min_segment_length",
        /// Result of [`arrow`]
        arrow: OptionMap => "arrow",
    }
}

/// Arrow specification for segments
///
/// `angle` in degrees, `length` in px, `ends` is "last", "first" or "both",
/// `kind` is "open" or "closed".
pub fn arrow(
    angle: Option<f64>,
    length: Option<f64>,
    ends: Option<&str>,
    kind: Option<&str>,
) -> OptionMap {
    OptionMap::new()
        .with("name", Some("arrow"))
        .with("angle", angle)
        .with("length", length)
        .with("ends", ends)
        .with("type", kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::options::find_shared_key;
    use crate::plot::OptionValue;

    #[test]
    fn test_mixins_seal_only_set_fields() {
        assert!(WithColorOption::default().seal().is_empty());
        assert_eq!(
            WithFillOption::from("color").seal().get("fill_by"),
            Some(&OptionValue::from("color"))
        );
        assert_eq!(
            WithSizeUnitOption::from("x").seal().get("size_unit"),
            Some(&OptionValue::from("x"))
        );
    }

    #[test]
    fn test_mixin_keys_are_disjoint() {
        assert_eq!(
            find_shared_key(&[
                WithColorOption::KEYS,
                WithFillOption::KEYS,
                WithSizeUnitOption::KEYS,
                LabelParameters::KEYS,
                RepelParameters::KEYS,
            ]),
            None
        );
        assert_eq!(
            find_shared_key(&[TextParameters::KEYS, RepelParameters::KEYS]),
            None
        );
    }

    #[test]
    fn test_label_parameters_extend_text_parameters() {
        for key in TextParameters::KEYS {
            assert!(LabelParameters::KEYS.contains(key));
        }
    }

    #[test]
    fn test_repel_arrow() {
        let params = RepelParameters::default()
            .seed(42)
            .arrow(arrow(None, Some(10.0), Some("both"), None));
        let sealed = params.seal();
        let arrow = sealed.get("arrow").and_then(|a| a.as_map()).unwrap();
        assert_eq!(arrow.get("length"), Some(&OptionValue::Number(10.0)));
        assert!(!arrow.contains_key("angle"));
        assert_eq!(sealed.get("seed"), Some(&OptionValue::Integer(42)));
    }
}
