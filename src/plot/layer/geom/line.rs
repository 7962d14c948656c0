//! Line and step geom implementations

use super::geom;
use crate::plot::layer::contrib::WithColorOption;
use crate::plot::layer::mapping::mapping_struct;
use crate::plot::options::options_struct;
use crate::plot::{Color, LineType};

options_struct! {
    /// Constant aesthetics shared by line and step
    pub struct LineAesthetics {
        x: f64 => "x",
        y: f64 => "y",
        alpha: f64 => "alpha",
        color: Color => "color",
        linetype: LineType => "linetype",
        size: f64 => "size",
    }
}

mapping_struct! {
    pub struct LineMapping {
        x => "x",
        y => "y",
        alpha => "alpha",
        color => "color",
        linetype => "linetype",
        size => "size",
        group => "group",
    }
}

geom! {
    /// Line geom - connects observations ordered by x
    pub struct Line => Line, LineMapping {
        aes: LineAesthetics,
        color_by: WithColorOption,
    }
}

geom! {
    /// Step geom - stairstep connection of observations
    pub struct Step => Step, LineMapping {
        aes: LineAesthetics,
        color_by: WithColorOption,
    }
}
