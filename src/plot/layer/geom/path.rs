//! Path geom implementation

use super::geom;
use crate::plot::layer::contrib::WithColorOption;
use crate::plot::layer::mapping::mapping_struct;
use crate::plot::options::options_struct;
use crate::plot::{Color, LineType};

options_struct! {
    /// Constant aesthetics of the path geometry
    pub struct PathAesthetics {
        x: f64 => "x",
        y: f64 => "y",
        alpha: f64 => "alpha",
        color: Color => "color",
        linetype: LineType => "linetype",
        size: f64 => "size",
    }
}

mapping_struct! {
    pub struct PathMapping {
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
    /// Path geom - connects observations in data order
    pub struct Path => Path, PathMapping {
        aes: PathAesthetics,
        color_by: WithColorOption,
    }
}
