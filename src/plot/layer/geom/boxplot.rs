//! Boxplot geom implementation

use super::geom;
use crate::plot::layer::contrib::{WithColorOption, WithFillOption};
use crate::plot::layer::mapping::mapping_struct;
use crate::plot::options::options_struct;
use crate::plot::{Color, LineType, Shape};

options_struct! {
    /// Constant aesthetics of the boxplot geometry
    pub struct BoxplotAesthetics {
        x: f64 => "x",
        y: f64 => "y",
        lower: f64 => "lower",
        upper: f64 => "upper",
        middle: f64 => "middle",
        ymin: f64 => "ymin",
        ymax: f64 => "ymax",
        /// Horizontal box statistics
        xlower: f64 => "xlower",
        xmiddle: f64 => "xmiddle",
        xupper: f64 => "xupper",
        xmin: f64 => "xmin",
        xmax: f64 => "xmax",
        color: Color => "color",
        fill: Color => "fill",
        size: f64 => "size",
        alpha: f64 => "alpha",
        linetype: LineType => "linetype",
        shape: Shape => "shape",
        width: f64 => "width",
        angle: f64 => "angle",
        /// Aesthetics of the outlier points
        outlier_color: Color => "outlier_color",
        outlier_fill: Color => "outlier_fill",
        outlier_shape: Shape => "outlier_shape",
        outlier_size: f64 => "outlier_size",
        outlier_stroke: f64 => "outlier_stroke",
        outlier_alpha: f64 => "outlier_alpha",
    }
}

options_struct! {
    /// Box layout parameters
    pub struct BoxplotParameters {
        /// Multiplier for the median line width
        fatten: f64 => "fatten",
        /// Whisker width relative to the box width
        whisker_width: f64 => "whisker_width",
        varwidth: bool => "varwidth",
    }
}

mapping_struct! {
    pub struct BoxplotMapping {
        x => "x",
        y => "y",
        lower => "lower",
        upper => "upper",
        middle => "middle",
        ymin => "ymin",
        ymax => "ymax",
        xlower => "xlower",
        xmiddle => "xmiddle",
        xupper => "xupper",
        xmin => "xmin",
        xmax => "xmax",
        color => "color",
        fill => "fill",
        size => "size",
        alpha => "alpha",
        linetype => "linetype",
        shape => "shape",
        width => "width",
        weight => "weight",
        group => "group",
    }
}

geom! {
    /// Boxplot geom - box-and-whiskers summary of a distribution
    pub struct Boxplot => Boxplot, BoxplotMapping {
        aes: BoxplotAesthetics,
        params: BoxplotParameters,
        color_by: WithColorOption,
        fill_by: WithFillOption,
    }
}
