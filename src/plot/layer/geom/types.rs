//! Core types for the geom builder system
//!
//! These types are used by all geom implementations and are shared across the module.

use crate::plot::layer::mapping::AesMapping;
use crate::plot::{OptionMap, OptionValue};

use super::{
    ABLineMapping, AreaMapping, BandMapping, BarMapping, BoxplotMapping, CrossBarMapping,
    ErrorBarMapping, HLineMapping, HexMapping, HistogramMapping, LabelMapping,
    LabelRepelMapping, LineMapping, LineRangeMapping, LollipopMapping, PathMapping, PieMapping,
    PointMapping, PointRangeMapping, PolygonMapping, QqLineMapping, QqMapping, RasterMapping,
    RectMapping, RibbonMapping, SegmentMapping, TextMapping, TextRepelMapping, TileMapping,
    VLineMapping,
};

/// Identifies which renderer-side geometry to instantiate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeomKind {
    Blank,
    Point,
    Path,
    Area,
    Histogram,
    Line,
    Bar,
    Tile,
    Hex,
    Raster,
    ABLine,
    HLine,
    VLine,
    Band,
    Rect,
    Segment,
    Text,
    Label,
    TextRepel,
    LabelRepel,
    Boxplot,
    ErrorBar,
    CrossBar,
    PointRange,
    LineRange,
    Ribbon,
    Polygon,
    Map,
    Step,
    Qq,
    QqLine,
    Pie,
    Lollipop,
}

impl GeomKind {
    /// All geometry kinds, in declaration order
    pub const ALL: [GeomKind; 33] = [
        GeomKind::Blank,
        GeomKind::Point,
        GeomKind::Path,
        GeomKind::Area,
        GeomKind::Histogram,
        GeomKind::Line,
        GeomKind::Bar,
        GeomKind::Tile,
        GeomKind::Hex,
        GeomKind::Raster,
        GeomKind::ABLine,
        GeomKind::HLine,
        GeomKind::VLine,
        GeomKind::Band,
        GeomKind::Rect,
        GeomKind::Segment,
        GeomKind::Text,
        GeomKind::Label,
        GeomKind::TextRepel,
        GeomKind::LabelRepel,
        GeomKind::Boxplot,
        GeomKind::ErrorBar,
        GeomKind::CrossBar,
        GeomKind::PointRange,
        GeomKind::LineRange,
        GeomKind::Ribbon,
        GeomKind::Polygon,
        GeomKind::Map,
        GeomKind::Step,
        GeomKind::Qq,
        GeomKind::QqLine,
        GeomKind::Pie,
        GeomKind::Lollipop,
    ];

    /// Name the renderer knows this geometry by
    pub fn name(&self) -> &'static str {
        match self {
            GeomKind::Blank => "blank",
            GeomKind::Point => "point",
            GeomKind::Path => "path",
            GeomKind::Area => "area",
            GeomKind::Histogram => "histogram",
            GeomKind::Line => "line",
            GeomKind::Bar => "bar",
            GeomKind::Tile => "tile",
            GeomKind::Hex => "hex",
            GeomKind::Raster => "raster",
            GeomKind::ABLine => "abline",
            GeomKind::HLine => "hline",
            GeomKind::VLine => "vline",
            GeomKind::Band => "band",
            GeomKind::Rect => "rect",
            GeomKind::Segment => "segment",
            GeomKind::Text => "text",
            GeomKind::Label => "label",
            GeomKind::TextRepel => "text_repel",
            GeomKind::LabelRepel => "label_repel",
            GeomKind::Boxplot => "boxplot",
            GeomKind::ErrorBar => "errorbar",
            GeomKind::CrossBar => "crossbar",
            GeomKind::PointRange => "pointrange",
            GeomKind::LineRange => "linerange",
            GeomKind::Ribbon => "ribbon",
            GeomKind::Polygon => "polygon",
            GeomKind::Map => "map",
            GeomKind::Step => "step",
            GeomKind::Qq => "qq",
            GeomKind::QqLine => "qq_line",
            GeomKind::Pie => "pie",
            GeomKind::Lollipop => "lollipop",
        }
    }

    /// Aesthetics the geometry's mapping builder accepts
    pub fn aesthetics(&self) -> &'static [&'static str] {
        match self {
            GeomKind::Blank => &[],
            GeomKind::Point => PointMapping::AESTHETICS,
            GeomKind::Path => PathMapping::AESTHETICS,
            GeomKind::Area => AreaMapping::AESTHETICS,
            GeomKind::Histogram => HistogramMapping::AESTHETICS,
            GeomKind::Line | GeomKind::Step => LineMapping::AESTHETICS,
            GeomKind::Bar => BarMapping::AESTHETICS,
            GeomKind::Tile => TileMapping::AESTHETICS,
            GeomKind::Hex => HexMapping::AESTHETICS,
            GeomKind::Raster => RasterMapping::AESTHETICS,
            GeomKind::ABLine => ABLineMapping::AESTHETICS,
            GeomKind::HLine => HLineMapping::AESTHETICS,
            GeomKind::VLine => VLineMapping::AESTHETICS,
            GeomKind::Band => BandMapping::AESTHETICS,
            GeomKind::Rect => RectMapping::AESTHETICS,
            GeomKind::Segment => SegmentMapping::AESTHETICS,
            GeomKind::Text => TextMapping::AESTHETICS,
            GeomKind::Label => LabelMapping::AESTHETICS,
            GeomKind::TextRepel => TextRepelMapping::AESTHETICS,
            GeomKind::LabelRepel => LabelRepelMapping::AESTHETICS,
            GeomKind::Boxplot => BoxplotMapping::AESTHETICS,
            GeomKind::ErrorBar => ErrorBarMapping::AESTHETICS,
            GeomKind::CrossBar => CrossBarMapping::AESTHETICS,
            GeomKind::PointRange => PointRangeMapping::AESTHETICS,
            GeomKind::LineRange => LineRangeMapping::AESTHETICS,
            GeomKind::Ribbon => RibbonMapping::AESTHETICS,
            GeomKind::Polygon | GeomKind::Map => PolygonMapping::AESTHETICS,
            GeomKind::Qq => QqMapping::AESTHETICS,
            GeomKind::QqLine => QqLineMapping::AESTHETICS,
            GeomKind::Pie => PieMapping::AESTHETICS,
            GeomKind::Lollipop => LollipopMapping::AESTHETICS,
        }
    }
}

impl std::fmt::Display for GeomKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for GeomKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeomKind::ALL
            .iter()
            .find(|kind| kind.name() == s)
            .copied()
            .ok_or_else(|| format!("Unknown geom '{}'", s))
    }
}

/// Sealed options of one geometry instance
///
/// Created once by a geom builder and immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct GeomOptions {
    kind: GeomKind,
    mapping: OptionMap,
    annotations: Vec<OptionValue>,
    parameters: OptionMap,
}

impl GeomOptions {
    pub fn new(
        kind: GeomKind,
        mapping: OptionMap,
        annotations: Vec<OptionValue>,
        parameters: OptionMap,
    ) -> Self {
        Self {
            kind,
            mapping,
            annotations,
            parameters,
        }
    }

    /// A geometry that draws nothing
    pub fn blank() -> Self {
        Self::new(GeomKind::Blank, OptionMap::new(), Vec::new(), OptionMap::new())
    }

    pub fn kind(&self) -> GeomKind {
        self.kind
    }

    /// Sealed aesthetic mapping (aesthetic -> column)
    pub fn mapping(&self) -> &OptionMap {
        &self.mapping
    }

    /// Annotations attached to mapped aesthetics (e.g. `as_discrete`)
    pub fn annotations(&self) -> &[OptionValue] {
        &self.annotations
    }

    /// Sealed constant aesthetics and parameters
    pub fn parameters(&self) -> &OptionMap {
        &self.parameters
    }

    /// Canonical option map for the renderer
    ///
    /// `{"geom": name}` + parameters + `{"mapping": ...}` (+ `mapping_annotations`).
    pub fn to_spec(&self) -> OptionMap {
        let mut spec = OptionMap::new();
        spec.insert("geom", self.kind.name());
        let mut tail = OptionMap::new();
        tail.insert("mapping", self.mapping.clone());
        if !self.annotations.is_empty() {
            tail.insert("mapping_annotations", self.annotations.clone());
        }
        spec.merge(&self.parameters).merge(&tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in GeomKind::ALL {
            assert_eq!(kind.name().parse::<GeomKind>(), Ok(kind));
        }
        assert!("violin".parse::<GeomKind>().is_err());
    }

    #[test]
    fn test_kind_names_are_unique() {
        let mut names: Vec<_> = GeomKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), GeomKind::ALL.len());
    }

    #[test]
    fn test_blank_spec() {
        let spec = GeomOptions::blank().to_spec();
        assert_eq!(spec.keys().collect::<Vec<_>>(), vec!["geom", "mapping"]);
        assert_eq!(spec.get("geom"), Some(&OptionValue::from("blank")));
        assert!(GeomKind::Blank.aesthetics().is_empty());
    }

    #[test]
    fn test_every_mapping_accepts_group() {
        for kind in GeomKind::ALL.iter().filter(|k| **k != GeomKind::Blank) {
            assert!(kind.aesthetics().contains(&"group"), "{} lacks group", kind);
        }
    }
}
