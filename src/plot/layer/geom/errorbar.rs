//! Interval geom implementations: errorbar, crossbar, pointrange and linerange

use super::geom;
use crate::plot::layer::contrib::{WithColorOption, WithFillOption};
use crate::plot::layer::mapping::mapping_struct;
use crate::plot::options::options_struct;
use crate::plot::{Color, LineType, Shape};

options_struct! {
    pub struct ErrorBarAesthetics {
        x: f64 => "x",
        ymin: f64 => "ymin",
        ymax: f64 => "ymax",
        y: f64 => "y",
        xmin: f64 => "xmin",
        xmax: f64 => "xmax",
        width: f64 => "width",
        height: f64 => "height",
        alpha: f64 => "alpha",
        color: Color => "color",
        linetype: LineType => "linetype",
        size: f64 => "size",
    }
}

mapping_struct! {
    pub struct ErrorBarMapping {
        x => "x",
        ymin => "ymin",
        ymax => "ymax",
        y => "y",
        xmin => "xmin",
        xmax => "xmax",
        width => "width",
        height => "height",
        alpha => "alpha",
        color => "color",
        linetype => "linetype",
        size => "size",
        group => "group",
    }
}

geom! {
    /// ErrorBar geom - whiskers over an interval
    pub struct ErrorBar => ErrorBar, ErrorBarMapping {
        aes: ErrorBarAesthetics,
        color_by: WithColorOption,
    }
}

options_struct! {
    pub struct CrossBarAesthetics {
        x: f64 => "x",
        ymin: f64 => "ymin",
        ymax: f64 => "ymax",
        middle: f64 => "middle",
        y: f64 => "y",
        xmin: f64 => "xmin",
        xmax: f64 => "xmax",
        width: f64 => "width",
        height: f64 => "height",
        alpha: f64 => "alpha",
        color: Color => "color",
        fill: Color => "fill",
        linetype: LineType => "linetype",
        shape: Shape => "shape",
        size: f64 => "size",
    }
}

mapping_struct! {
    pub struct CrossBarMapping {
        x => "x",
        ymin => "ymin",
        ymax => "ymax",
        middle => "middle",
        y => "y",
        xmin => "xmin",
        xmax => "xmax",
        width => "width",
        height => "height",
        alpha => "alpha",
        color => "color",
        fill => "fill",
        linetype => "linetype",
        shape => "shape",
        size => "size",
        group => "group",
    }
}

geom! {
    /// CrossBar geom - a box spanning an interval with a middle line
    pub struct CrossBar => CrossBar, CrossBarMapping {
        aes: CrossBarAesthetics,
        color_by: WithColorOption,
        fill_by: WithFillOption,
    }
}

options_struct! {
    pub struct PointRangeAesthetics {
        x: f64 => "x",
        y: f64 => "y",
        ymin: f64 => "ymin",
        ymax: f64 => "ymax",
        xmin: f64 => "xmin",
        xmax: f64 => "xmax",
        alpha: f64 => "alpha",
        color: Color => "color",
        fill: Color => "fill",
        linetype: LineType => "linetype",
        shape: Shape => "shape",
        size: f64 => "size",
        stroke: f64 => "stroke",
        linewidth: f64 => "linewidth",
    }
}

mapping_struct! {
    pub struct PointRangeMapping {
        x => "x",
        y => "y",
        ymin => "ymin",
        ymax => "ymax",
        xmin => "xmin",
        xmax => "xmax",
        alpha => "alpha",
        color => "color",
        fill => "fill",
        linetype => "linetype",
        shape => "shape",
        size => "size",
        stroke => "stroke",
        linewidth => "linewidth",
        group => "group",
    }
}

geom! {
    /// PointRange geom - a point with a line spanning an interval
    pub struct PointRange => PointRange, PointRangeMapping {
        aes: PointRangeAesthetics,
        color_by: WithColorOption,
        fill_by: WithFillOption,
    }
}

options_struct! {
    pub struct LineRangeAesthetics {
        x: f64 => "x",
        ymin: f64 => "ymin",
        ymax: f64 => "ymax",
        y: f64 => "y",
        xmin: f64 => "xmin",
        xmax: f64 => "xmax",
        alpha: f64 => "alpha",
        color: Color => "color",
        linetype: LineType => "linetype",
        size: f64 => "size",
    }
}

mapping_struct! {
    pub struct LineRangeMapping {
        x => "x",
        ymin => "ymin",
        ymax => "ymax",
        y => "y",
        xmin => "xmin",
        xmax => "xmax",
        alpha => "alpha",
        color => "color",
        linetype => "linetype",
        size => "size",
        group => "group",
    }
}

geom! {
    /// LineRange geom - a line spanning an interval
    pub struct LineRange => LineRange, LineRangeMapping {
        aes: LineRangeAesthetics,
        color_by: WithColorOption,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::geom::{GeomBuilder, GeomKind};
    use crate::plot::OptionValue;

    #[test]
    fn test_interval_kinds() {
        assert_eq!(ErrorBar::default().options().kind(), GeomKind::ErrorBar);
        assert_eq!(CrossBar::default().options().kind(), GeomKind::CrossBar);
        assert_eq!(PointRange::default().options().kind(), GeomKind::PointRange);
        assert_eq!(LineRange::default().options().kind(), GeomKind::LineRange);
    }

    #[test]
    fn test_errorbar_vertical_interval() {
        let errorbar = ErrorBar::default()
            .aes(ErrorBarAesthetics::default().width(0.2))
            .build(|m| {
                m.x("dose").ymin("lower").ymax("upper");
            });
        let spec = errorbar.to_spec();
        assert_eq!(
            spec.keys().collect::<Vec<_>>(),
            vec!["geom", "width", "mapping"]
        );
        assert_eq!(errorbar.mapping().len(), 3);
    }

    #[test]
    fn test_pointrange_linewidth_is_separate_from_size() {
        let pointrange = PointRange::default()
            .aes(PointRangeAesthetics::default().size(3).linewidth(0.5))
            .options();
        assert_eq!(
            pointrange.parameters().get("linewidth"),
            Some(&OptionValue::Number(0.5))
        );
        assert_eq!(
            pointrange.parameters().get("size"),
            Some(&OptionValue::Number(3.0))
        );
    }
}
