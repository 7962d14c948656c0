//! Q-Q plot geom implementations

use super::geom;
use crate::plot::layer::contrib::{WithColorOption, WithFillOption};
use crate::plot::layer::mapping::mapping_struct;
use crate::plot::options::options_struct;
use crate::plot::{Color, LineType, Shape};

options_struct! {
    pub struct QqAesthetics {
        alpha: f64 => "alpha",
        color: Color => "color",
        fill: Color => "fill",
        shape: Shape => "shape",
        size: f64 => "size",
        stroke: f64 => "stroke",
    }
}

mapping_struct! {
    pub struct QqMapping {
        sample => "sample",
        x => "x",
        y => "y",
        alpha => "alpha",
        color => "color",
        fill => "fill",
        shape => "shape",
        size => "size",
        stroke => "stroke",
        group => "group",
    }
}

geom! {
    /// Qq geom - sample quantiles against theoretical quantiles
    pub struct Qq => Qq, QqMapping {
        aes: QqAesthetics,
        color_by: WithColorOption,
        fill_by: WithFillOption,
    }
}

options_struct! {
    pub struct QqLineAesthetics {
        alpha: f64 => "alpha",
        color: Color => "color",
        linetype: LineType => "linetype",
        size: f64 => "size",
    }
}

mapping_struct! {
    pub struct QqLineMapping {
        sample => "sample",
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
    /// QqLine geom - reference line through the quartiles of a Q-Q plot
    pub struct QqLine => QqLine, QqLineMapping {
        aes: QqLineAesthetics,
        color_by: WithColorOption,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::geom::GeomBuilder;
    use crate::plot::OptionValue;

    #[test]
    fn test_qq_sample_mapping() {
        let qq = Qq::default().build(|m| {
            m.sample("residual").color("model");
        });
        assert_eq!(
            qq.mapping().keys().collect::<Vec<_>>(),
            vec!["sample", "color"]
        );

        let line = QqLine::default()
            .aes(QqLineAesthetics::default().color("red"))
            .build(|m| {
                m.sample("residual");
            });
        assert_eq!(line.to_spec().get("geom"), Some(&OptionValue::from("qq_line")));
    }
}
