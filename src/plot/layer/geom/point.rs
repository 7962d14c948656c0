//! Point geom implementation

use super::geom;
use crate::plot::layer::contrib::{WithColorOption, WithFillOption, WithSizeUnitOption};
use crate::plot::layer::mapping::mapping_struct;
use crate::plot::options::options_struct;
use crate::plot::{Color, Shape};

options_struct! {
    /// Constant aesthetics of the point geometry
    pub struct PointAesthetics {
        x: f64 => "x",
        y: f64 => "y",
        alpha: f64 => "alpha",
        color: Color => "color",
        fill: Color => "fill",
        shape: Shape => "shape",
        size: f64 => "size",
        stroke: f64 => "stroke",
        angle: f64 => "angle",
    }
}

mapping_struct! {
    pub struct PointMapping {
        x => "x",
        y => "y",
        alpha => "alpha",
        color => "color",
        fill => "fill",
        shape => "shape",
        size => "size",
        stroke => "stroke",
        angle => "angle",
        group => "group",
    }
}

geom! {
    /// Point geom - scatter plots and similar
    pub struct Point => Point, PointMapping {
        aes: PointAesthetics,
        size_unit: WithSizeUnitOption,
        color_by: WithColorOption,
        fill_by: WithFillOption,
    }
}
