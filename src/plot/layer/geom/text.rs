//! Text and repelled text geom implementations

use super::geom;
use crate::plot::layer::contrib::{
    RepelParameters, TextParameters, WithColorOption, WithSizeUnitOption,
};
use crate::plot::layer::mapping::mapping_struct;
use crate::plot::options::options_struct;
use crate::plot::{Color, LineType, OptionValue, Shape};

options_struct! {
    /// Constant aesthetics of the text geometry
    pub struct TextAesthetics {
        x: f64 => "x",
        y: f64 => "y",
        label: String => "label",
        alpha: f64 => "alpha",
        color: Color => "color",
        size: f64 => "size",
        family: String => "family",
        /// "plain", "bold", "italic" or "bold_italic"
        fontface: String => "fontface",
        /// Number in 0..=1 or "left", "middle", "right"
        hjust: OptionValue => "hjust",
        /// Number in 0..=1 or "bottom", "center", "top"
        vjust: OptionValue => "vjust",
        angle: f64 => "angle",
        lineheight: f64 => "lineheight",
    }
}

mapping_struct! {
    pub struct TextMapping {
        x => "x",
        y => "y",
        label => "label",
        alpha => "alpha",
        color => "color",
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
    /// Text geom - adds text directly to the plot
    pub struct Text => Text, TextMapping {
        aes: TextAesthetics,
        text: TextParameters,
        size_unit: WithSizeUnitOption,
        color_by: WithColorOption,
    }
}

options_struct! {
    /// Text aesthetics plus the anchor point and connector segment
    pub struct TextRepelAesthetics {
        x: f64 => "x",
        y: f64 => "y",
        label: String => "label",
        alpha: f64 => "alpha",
        color: Color => "color",
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
    pub struct TextRepelMapping {
        x => "x",
        y => "y",
        label => "label",
        alpha => "alpha",
        color => "color",
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
    /// Text geom with labels repelled away from each other and the data points
    pub struct TextRepel => TextRepel, TextRepelMapping {
        aes: TextRepelAesthetics,
        text: TextParameters,
        repel: RepelParameters,
        size_unit: WithSizeUnitOption,
        color_by: WithColorOption,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::geom::{GeomBuilder, GeomKind};

    #[test]
    fn test_text_composition_order() {
        let text = Text::default()
            .aes(TextAesthetics::default().label("hi").hjust("left"))
            .text(TextParameters::default().label_format("{.2f}").na_text("-"))
            .size_unit("x")
            .color_by("fill");

        assert_eq!(
            text.seal().keys().collect::<Vec<_>>(),
            vec!["label", "hjust", "label_format", "na_text", "size_unit", "color_by"]
        );
    }

    #[test]
    fn test_numeric_justification() {
        let text = Text::default()
            .aes(TextAesthetics::default().vjust(0.5))
            .options();
        assert_eq!(text.parameters().get("vjust"), Some(&OptionValue::Number(0.5)));
    }

    #[test]
    fn test_text_repel_spec() {
        let repel = TextRepel::default()
            .aes(TextRepelAesthetics::default().point_size(2).segment_color("gray"))
            .repel(RepelParameters::default().seed(1).direction("y"))
            .build(|m| {
                m.label("name");
            });

        assert_eq!(repel.kind(), GeomKind::TextRepel);
        let spec = repel.to_spec();
        assert_eq!(spec.get("geom"), Some(&OptionValue::from("text_repel")));
        assert_eq!(spec.get("seed"), Some(&OptionValue::Integer(1)));
        assert_eq!(spec.get("segment_color"), Some(&OptionValue::from("gray")));
    }
}
