//! Pie geom implementation

use super::geom;
use crate::plot::layer::contrib::{WithColorOption, WithFillOption, WithSizeUnitOption};
use crate::plot::layer::mapping::mapping_struct;
use crate::plot::options::options_struct;
use crate::plot::Color;

options_struct! {
    pub struct PieAesthetics {
        x: f64 => "x",
        y: f64 => "y",
        slice: f64 => "slice",
        /// Distance of a sector from the center, as a fraction of the radius
        explode: f64 => "explode",
        size: f64 => "size",
        fill: Color => "fill",
        alpha: f64 => "alpha",
        color: Color => "color",
        stroke: f64 => "stroke",
    }
}

options_struct! {
    /// Sector layout parameters
    pub struct PieParameters {
        /// Inner radius as a fraction of the outer radius; 0 draws a pie, >0 a donut
        hole: f64 => "hole",
        /// "outer", "inner" or "both"
        stroke_side: String => "stroke_side",
        spacer_width: f64 => "spacer_width",
        spacer_color: Color => "spacer_color",
        /// Angle of the first sector in degrees
        start: f64 => "start",
        /// 1 for clockwise, -1 for anticlockwise
        direction: i64 => "direction",
    }
}

mapping_struct! {
    pub struct PieMapping {
        x => "x",
        y => "y",
        slice => "slice",
        explode => "explode",
        size => "size",
        fill => "fill",
        alpha => "alpha",
        color => "color",
        stroke => "stroke",
        weight => "weight",
        group => "group",
    }
}

geom! {
    /// Pie geom - pie charts and donuts
    pub struct Pie => Pie, PieMapping {
        aes: PieAesthetics,
        params: PieParameters,
        size_unit: WithSizeUnitOption,
        fill_by: WithFillOption,
        color_by: WithColorOption,
    }
}
