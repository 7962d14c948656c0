//! Reference line and band geom implementations

use super::geom;
use crate::plot::layer::contrib::{WithColorOption, WithFillOption};
use crate::plot::layer::mapping::mapping_struct;
use crate::plot::options::options_struct;
use crate::plot::{Color, LineType, OptionValue};

options_struct! {
    pub struct ABLineAesthetics {
        slope: f64 => "slope",
        intercept: f64 => "intercept",
        alpha: f64 => "alpha",
        color: Color => "color",
        linetype: LineType => "linetype",
        size: f64 => "size",
    }
}

mapping_struct! {
    pub struct ABLineMapping {
        slope => "slope",
        intercept => "intercept",
        alpha => "alpha",
        color => "color",
        linetype => "linetype",
        size => "size",
        group => "group",
    }
}

geom! {
    /// ABLine geom - line given by slope and intercept
    pub struct ABLine => ABLine, ABLineMapping {
        aes: ABLineAesthetics,
        color_by: WithColorOption,
    }
}

options_struct! {
    pub struct HLineAesthetics {
        /// Number, date-time millis or a discrete value
        yintercept: OptionValue => "yintercept",
        alpha: f64 => "alpha",
        color: Color => "color",
        linetype: LineType => "linetype",
        size: f64 => "size",
    }
}

mapping_struct! {
    pub struct HLineMapping {
        yintercept => "yintercept",
        alpha => "alpha",
        color => "color",
        linetype => "linetype",
        size => "size",
        group => "group",
    }
}

geom! {
    /// HLine geom - horizontal reference line
    pub struct HLine => HLine, HLineMapping {
        aes: HLineAesthetics,
        color_by: WithColorOption,
    }
}

options_struct! {
    pub struct VLineAesthetics {
        xintercept: OptionValue => "xintercept",
        alpha: f64 => "alpha",
        color: Color => "color",
        linetype: LineType => "linetype",
        size: f64 => "size",
    }
}

mapping_struct! {
    pub struct VLineMapping {
        xintercept => "xintercept",
        alpha => "alpha",
        color => "color",
        linetype => "linetype",
        size => "size",
        group => "group",
    }
}

geom! {
    /// VLine geom - vertical reference line
    pub struct VLine => VLine, VLineMapping {
        aes: VLineAesthetics,
        color_by: WithColorOption,
    }
}

options_struct! {
    pub struct BandAesthetics {
        xmin: OptionValue => "xmin",
        xmax: OptionValue => "xmax",
        ymin: OptionValue => "ymin",
        ymax: OptionValue => "ymax",
        alpha: f64 => "alpha",
        color: Color => "color",
        fill: Color => "fill",
        size: f64 => "size",
        linetype: LineType => "linetype",
    }
}

mapping_struct! {
    pub struct BandMapping {
        xmin => "xmin",
        xmax => "xmax",
        ymin => "ymin",
        ymax => "ymax",
        alpha => "alpha",
        color => "color",
        fill => "fill",
        size => "size",
        linetype => "linetype",
        group => "group",
    }
}

geom! {
    /// Band geom - a shaded x or y range spanning the panel
    pub struct Band => Band, BandMapping {
        aes: BandAesthetics,
        color_by: WithColorOption,
        fill_by: WithFillOption,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::geom::GeomBuilder;
    use chrono::NaiveDate;

    #[test]
    fn test_hline_intercept_accepts_datetime() {
        let day = NaiveDate::from_ymd_opt(1970, 1, 3).unwrap();
        let hline = HLine::default()
            .aes(HLineAesthetics::default().yintercept(day).linetype(2))
            .options();
        assert_eq!(
            hline.parameters().get("yintercept"),
            Some(&OptionValue::Integer(172_800_000))
        );
        assert_eq!(hline.parameters().get("linetype"), Some(&OptionValue::Integer(2)));
    }

    #[test]
    fn test_vline_discrete_intercept() {
        let vline = VLine::default()
            .aes(VLineAesthetics::default().xintercept("Tuesday"))
            .options();
        assert_eq!(
            vline.parameters().get("xintercept"),
            Some(&OptionValue::from("Tuesday"))
        );
    }

    #[test]
    fn test_band_range_and_fill_by() {
        let band = Band::default()
            .aes(BandAesthetics::default().xmin(1.0).xmax(2.5).alpha(0.2))
            .fill_by("color")
            .options();
        assert_eq!(
            band.parameters().keys().collect::<Vec<_>>(),
            vec!["xmin", "xmax", "alpha", "fill_by"]
        );
    }
}
