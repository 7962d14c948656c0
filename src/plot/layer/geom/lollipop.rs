//! Lollipop geom implementation

use super::geom;
use crate::plot::layer::contrib::{WithColorOption, WithFillOption};
use crate::plot::layer::mapping::mapping_struct;
use crate::plot::options::options_struct;
use crate::plot::{Color, LineType, Shape};

options_struct! {
    pub struct LollipopAesthetics {
        x: f64 => "x",
        y: f64 => "y",
        size: f64 => "size",
        stroke: f64 => "stroke",
        linewidth: f64 => "linewidth",
        color: Color => "color",
        fill: Color => "fill",
        alpha: f64 => "alpha",
        shape: Shape => "shape",
        linetype: LineType => "linetype",
    }
}

options_struct! {
    pub struct LollipopParameters {
        /// Multiplier for the candy size
        fatten: f64 => "fatten",
        /// Slope of the baseline
        slope: f64 => "slope",
        /// Intercept of the baseline
        intercept: f64 => "intercept",
        /// Stick direction: "v", "h" or "s"
        dir: String => "dir",
    }
}

mapping_struct! {
    pub struct LollipopMapping {
        x => "x",
        y => "y",
        size => "size",
        stroke => "stroke",
        linewidth => "linewidth",
        color => "color",
        fill => "fill",
        alpha => "alpha",
        shape => "shape",
        linetype => "linetype",
        group => "group",
    }
}

geom! {
    /// Lollipop geom - a point on a stick from a baseline
    pub struct Lollipop => Lollipop, LollipopMapping {
        aes: LollipopAesthetics,
        params: LollipopParameters,
        color_by: WithColorOption,
        fill_by: WithFillOption,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::geom::GeomBuilder;
    use crate::plot::OptionValue;

    #[test]
    fn test_lollipop_baseline() {
        let lollipop = Lollipop::default()
            .params(LollipopParameters::default().slope(1).intercept(0).dir("s"))
            .options();
        assert_eq!(
            lollipop.to_spec().keys().collect::<Vec<_>>(),
            vec!["geom", "slope", "intercept", "dir", "mapping"]
        );
        assert_eq!(lollipop.parameters().get("dir"), Some(&OptionValue::from("s")));
    }
}
