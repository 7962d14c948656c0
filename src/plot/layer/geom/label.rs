//! Label and repelled label geom implementations

use super::geom;
use crate::plot::layer::contrib::{
    LabelParameters, RepelParameters, WithColorOption, WithFillOption, WithSizeUnitOption,
};
use crate::plot::layer::mapping::mapping_struct;
use crate::plot::options::options_struct;
use crate::plot::{Color, LineType, OptionValue, Shape};

options_struct! {
    /// Text aesthetics plus the label box fill
    pub struct LabelAesthetics {
        x: f64 => "x",
        y: f64 => "y",
        label: String => "label",
        alpha: f64 => "alpha",
        color: Color => "color",
        fill: Color => "fill",
        size: f64 => "size",
        family: String => "family",
        fontface: String => "fontface",
        hjust: OptionValue => "hjust",
        vjust: OptionValue => "vjust",
        angle: f64 => "angle",
        lineheight: f64 => "lineheight",
    }
}

mapping_struct! {
    pub struct LabelMapping {
        x => "x",
        y => "y",
        label => "label",
        alpha => "alpha",
        color => "color",
        fill => "fill",
        size => "size",
        family => "family",
        fontface => "fontface",
        hjust => "hjust",
        vjust => "vjust",
        angle => "angle",
        lineheight => "lineheight",
        group => "group",
    }
}

geom! {
    /// Label geom - text inside a rectangle
    pub struct Label => Label, LabelMapping {
        aes: LabelAesthetics,
        label: LabelParameters,
        size_unit: WithSizeUnitOption,
        color_by: WithColorOption,
        fill_by: WithFillOption,
    }
}

options_struct! {
    pub struct LabelRepelAesthetics {
        x: f64 => "x",
        y: f64 => "y",
        label: String => "label",
        alpha: f64 => "alpha",
        color: Color => "color",
        fill: Color => "fill",
        size: f64 => "size",
        family: String => "family",
        fontface: String => "fontface",
        hjust: OptionValue => "hjust",
        vjust: OptionValue => "vjust",
        angle: f64 => "angle",
        lineheight: f64 => "lineheight",
        shape: Shape => "shape",
        point_size: f64 => "point_size",
        point_stroke: f64 => "point_stroke",
        segment_color: Color => "segment_color",
        segment_size: f64 => "segment_size",
        segment_alpha: f64 => "segment_alpha",
        linetype: LineType => "linetype",
    }
}

mapping_struct! {
    pub struct LabelRepelMapping {
        x => "x",
        y => "y",
        label => "label",
        alpha => "alpha",
        color => "color",
        fill => "fill",
        size => "size",
        family => "family",
        fontface => "fontface",
        hjust => "hjust",
        vjust => "vjust",
        angle => "angle",
        lineheight => "lineheight",
        shape => "shape",
        point_size => "point_size",
        point_stroke => "point_stroke",
        segment_color => "segment_color",
        segment_size => "segment_size",
        segment_alpha => "segment_alpha",
        linetype => "linetype",
        group => "group",
    }
}

geom! {
    /// Label geom with boxes repelled away from each other and the data points
    pub struct LabelRepel => LabelRepel, LabelRepelMapping {
        aes: LabelRepelAesthetics,
        label: LabelParameters,
        repel: RepelParameters,
        size_unit: WithSizeUnitOption,
        color_by: WithColorOption,
        fill_by: WithFillOption,
    }
}
