//! Bar and histogram geom implementations

use super::geom;
use crate::plot::layer::contrib::{WithColorOption, WithFillOption};
use crate::plot::layer::mapping::mapping_struct;
use crate::plot::options::options_struct;
use crate::plot::Color;

options_struct! {
    /// Constant aesthetics of the bar geometry
    pub struct BarAesthetics {
        x: f64 => "x",
        y: f64 => "y",
        alpha: f64 => "alpha",
        color: Color => "color",
        fill: Color => "fill",
        /// Bar width as a fraction of the resolution
        width: f64 => "width",
        size: f64 => "size",
    }
}

mapping_struct! {
    pub struct BarMapping {
        x => "x",
        y => "y",
        alpha => "alpha",
        color => "color",
        fill => "fill",
        width => "width",
        size => "size",
        weight => "weight",
        group => "group",
    }
}

geom! {
    /// Bar geom - bars with heights proportional to the count (or `y`)
    pub struct Bar => Bar, BarMapping {
        aes: BarAesthetics,
        color_by: WithColorOption,
        fill_by: WithFillOption,
    }
}

options_struct! {
    /// Constant aesthetics of the histogram geometry
    pub struct HistogramAesthetics {
        x: f64 => "x",
        y: f64 => "y",
        alpha: f64 => "alpha",
        color: Color => "color",
        fill: Color => "fill",
        size: f64 => "size",
    }
}

mapping_struct! {
    pub struct HistogramMapping {
        x => "x",
        y => "y",
        alpha => "alpha",
        color => "color",
        fill => "fill",
        size => "size",
        weight => "weight",
        group => "group",
    }
}

geom! {
    /// Histogram geom - bars over binned continuous data
    pub struct Histogram => Histogram, HistogramMapping {
        aes: HistogramAesthetics,
        color_by: WithColorOption,
        fill_by: WithFillOption,
    }
}
