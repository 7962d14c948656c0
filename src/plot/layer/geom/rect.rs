//! Rect geom implementation

use super::geom;
use crate::plot::layer::contrib::{WithColorOption, WithFillOption};
use crate::plot::layer::mapping::mapping_struct;
use crate::plot::options::options_struct;
use crate::plot::{Color, LineType};

options_struct! {
    pub struct RectAesthetics {
        xmin: f64 => "xmin",
        xmax: f64 => "xmax",
        ymin: f64 => "ymin",
        ymax: f64 => "ymax",
        alpha: f64 => "alpha",
        color: Color => "color",
        fill: Color => "fill",
        linetype: LineType => "linetype",
        size: f64 => "size",
    }
}

mapping_struct! {
    pub struct RectMapping {
        xmin => "xmin",
        xmax => "xmax",
        ymin => "ymin",
        ymax => "ymax",
        alpha => "alpha",
        color => "color",
        fill => "fill",
        linetype => "linetype",
        size => "size",
        group => "group",
    }
}

geom! {
    /// Rect geom - axis-aligned rectangles given by their corners
    pub struct Rect => Rect, RectMapping {
        aes: RectAesthetics,
        color_by: WithColorOption,
        fill_by: WithFillOption,
    }
}
