//! Segment geom implementation

use super::geom;
use crate::plot::layer::contrib::WithColorOption;
use crate::plot::layer::mapping::mapping_struct;
use crate::plot::options::options_struct;
use crate::plot::{Color, LineType};

options_struct! {
    pub struct SegmentAesthetics {
        x: f64 => "x",
        y: f64 => "y",
        xend: f64 => "xend",
        yend: f64 => "yend",
        alpha: f64 => "alpha",
        color: Color => "color",
        linetype: LineType => "linetype",
        size: f64 => "size",
        size_start: f64 => "size_start",
        size_end: f64 => "size_end",
        stroke_start: f64 => "stroke_start",
        stroke_end: f64 => "stroke_end",
    }
}

mapping_struct! {
    pub struct SegmentMapping {
        x => "x",
        y => "y",
        xend => "xend",
        yend => "yend",
        alpha => "alpha",
        color => "color",
        linetype => "linetype",
        size => "size",
        size_start => "size_start",
        size_end => "size_end",
        stroke_start => "stroke_start",
        stroke_end => "stroke_end",
        group => "group",
    }
}

geom! {
    /// Segment geom - straight line between two points
    pub struct Segment => Segment, SegmentMapping {
        aes: SegmentAesthetics,
        color_by: WithColorOption,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::geom::GeomBuilder;
    use crate::plot::OptionValue;

    #[test]
    fn test_segment_endpoints() {
        let segment = Segment::default()
            .aes(SegmentAesthetics::default().x(0).y(0).xend(1).yend(1))
            .build(|m| {
                m.size_start("weight");
            });

        assert_eq!(
            segment.parameters().keys().collect::<Vec<_>>(),
            vec!["x", "y", "xend", "yend"]
        );
        assert_eq!(segment.parameters().get("xend"), Some(&OptionValue::Number(1.0)));
        assert_eq!(
            segment.mapping().get("size_start"),
            Some(&OptionValue::from("weight"))
        );
    }
}
