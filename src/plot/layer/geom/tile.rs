//! Tile, hex and raster geom implementations

use super::geom;
use crate::plot::layer::contrib::{WithColorOption, WithFillOption};
use crate::plot::layer::mapping::mapping_struct;
use crate::plot::options::options_struct;
use crate::plot::{Color, LineType};

options_struct! {
    /// Constant aesthetics shared by tile and hex
    pub struct TileAesthetics {
        x: f64 => "x",
        y: f64 => "y",
        width: f64 => "width",
        height: f64 => "height",
        alpha: f64 => "alpha",
        color: Color => "color",
        fill: Color => "fill",
        linetype: LineType => "linetype",
        size: f64 => "size",
    }
}

mapping_struct! {
    pub struct TileMapping {
        x => "x",
        y => "y",
        width => "width",
        height => "height",
        alpha => "alpha",
        color => "color",
        fill => "fill",
        linetype => "linetype",
        size => "size",
        group => "group",
    }
}

mapping_struct! {
    pub struct HexMapping {
        x => "x",
        y => "y",
        width => "width",
        height => "height",
        alpha => "alpha",
        color => "color",
        fill => "fill",
        linetype => "linetype",
        size => "size",
        weight => "weight",
        group => "group",
    }
}

geom! {
    /// Tile geom - rectangles centered on (x, y)
    pub struct Tile => Tile, TileMapping {
        aes: TileAesthetics,
        color_by: WithColorOption,
        fill_by: WithFillOption,
    }
}

geom! {
    /// Hex geom - hexagonal cells
    pub struct Hex => Hex, HexMapping {
        aes: TileAesthetics,
        color_by: WithColorOption,
        fill_by: WithFillOption,
    }
}

options_struct! {
    pub struct RasterAesthetics {
        x: f64 => "x",
        y: f64 => "y",
        alpha: f64 => "alpha",
        fill: Color => "fill",
    }
}

mapping_struct! {
    pub struct RasterMapping {
        x => "x",
        y => "y",
        alpha => "alpha",
        fill => "fill",
        group => "group",
    }
}

geom! {
    /// Raster geom - high performance tiles of equal size
    pub struct Raster => Raster, RasterMapping {
        aes: RasterAesthetics,
        fill_by: WithFillOption,
    }
}
