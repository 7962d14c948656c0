//! Area geom implementation

use super::geom;
use crate::plot::layer::contrib::{WithColorOption, WithFillOption};
use crate::plot::layer::mapping::mapping_struct;
use crate::plot::options::options_struct;
use crate::plot::{Color, LineType};

options_struct! {
    /// Constant aesthetics of the area geometry
    pub struct AreaAesthetics {
        x: f64 => "x",
        y: f64 => "y",
        alpha: f64 => "alpha",
        color: Color => "color",
        fill: Color => "fill",
        linetype: LineType => "linetype",
        size: f64 => "size",
    }
}

mapping_struct! {
    pub struct AreaMapping {
        x => "x",
        y => "y",
        alpha => "alpha",
        color => "color",
        fill => "fill",
        linetype => "linetype",
        size => "size",
        group => "group",
    }
}

geom! {
    /// Area geom - filled area charts
    pub struct Area => Area, AreaMapping {
        aes: AreaAesthetics,
        color_by: WithColorOption,
        fill_by: WithFillOption,
    }
}
