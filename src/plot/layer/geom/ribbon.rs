//! Ribbon geom implementation

use super::geom;
use crate::plot::layer::contrib::{WithColorOption, WithFillOption};
use crate::plot::layer::mapping::mapping_struct;
use crate::plot::options::options_struct;
use crate::plot::{Color, LineType};

options_struct! {
    /// Constant aesthetics of the ribbon geometry
    pub struct RibbonAesthetics {
        x: f64 => "x",
        ymin: f64 => "ymin",
        ymax: f64 => "ymax",
        y: f64 => "y",
        xmin: f64 => "xmin",
        xmax: f64 => "xmax",
        size: f64 => "size",
        linetype: LineType => "linetype",
        color: Color => "color",
        fill: Color => "fill",
        alpha: f64 => "alpha",
    }
}

mapping_struct! {
    pub struct RibbonMapping {
        x => "x",
        ymin => "ymin",
        ymax => "ymax",
        y => "y",
        xmin => "xmin",
        xmax => "xmax",
        size => "size",
        linetype => "linetype",
        color => "color",
        fill => "fill",
        alpha => "alpha",
        group => "group",
    }
}

geom! {
    /// Ribbon geom - a y interval around x (or the horizontal counterpart)
    pub struct Ribbon => Ribbon, RibbonMapping {
        aes: RibbonAesthetics,
        color_by: WithColorOption,
        fill_by: WithFillOption,
    }
}
