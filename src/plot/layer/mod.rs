//! Layer types for plot specifications
//!
//! A layer combines one sealed geometry with the stat it draws, its position
//! adjustment, and layer-level options such as tooltips and annotations.

pub mod contrib;
pub mod geom;
pub mod labels;
pub mod mapping;
pub mod position;
pub mod stat;

pub use contrib::arrow;
pub use geom::{GeomBuilder, GeomKind, GeomOptions};
pub use labels::{tooltips_none, LayerLabels, LayerTooltips};
pub use mapping::{as_discrete, AesMapping, DiscreteMapping, MappingValue, PlotMapping};
pub use position::{PosKind, PosOptions};
pub use stat::{StatKind, StatOptions};

use crate::plot::{OptionMap, OptionValue};

/// A single geometry layer
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    geom: GeomOptions,
    stat: Option<StatOptions>,
    position: Option<PosOptions>,
    show_legend: bool,
    inherit_aes: Option<bool>,
    manual_key: Option<OptionValue>,
    sampling: Option<OptionValue>,
    tooltips: Option<LayerTooltips>,
    labels: Option<LayerLabels>,
}

impl Layer {
    pub fn new(geom: GeomOptions) -> Self {
        Self {
            geom,
            stat: None,
            position: None,
            show_legend: true,
            inherit_aes: None,
            manual_key: None,
            sampling: None,
            tooltips: None,
            labels: None,
        }
    }

    pub fn stat(mut self, stat: StatOptions) -> Self {
        self.stat = Some(stat);
        self
    }

    pub fn position(mut self, position: PosOptions) -> Self {
        self.position = Some(position);
        self
    }

    pub fn show_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }

    /// Whether the layer combines its mapping with the plot mapping
    pub fn inherit_aes(mut self, inherit: bool) -> Self {
        self.inherit_aes = Some(inherit);
        self
    }

    /// Legend key for the layer, a label string or a key options map
    pub fn manual_key(mut self, key: impl Into<OptionValue>) -> Self {
        self.manual_key = Some(key.into());
        self
    }

    /// Data sampling, a sampling name or a sampling options map
    pub fn sampling(mut self, sampling: impl Into<OptionValue>) -> Self {
        self.sampling = Some(sampling.into());
        self
    }

    pub fn tooltips(mut self, tooltips: LayerTooltips) -> Self {
        self.tooltips = Some(tooltips);
        self
    }

    pub fn labels(mut self, labels: LayerLabels) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn geom(&self) -> &GeomOptions {
        &self.geom
    }

    /// Geom spec, then stat, then layer options
    pub fn to_spec(&self) -> OptionMap {
        let stat = self
            .stat
            .as_ref()
            .map(StatOptions::to_spec)
            .unwrap_or_default();

        let layer = OptionMap::new()
            .with("position", self.position.as_ref().map(PosOptions::to_value))
            .with("show_legend", (!self.show_legend).then_some(false))
            .with("inherit_aes", self.inherit_aes)
            .with("manual_key", self.manual_key.clone())
            .with("sampling", self.sampling.clone())
            .with("tooltips", self.tooltips.as_ref().map(LayerTooltips::to_value))
            .with("labels", self.labels.as_ref().map(|l| l.options().clone()));

        tracing::trace!(
            geom = %self.geom.kind(),
            stat = stat.len(),
            options = layer.len(),
            "Composing layer spec"
        );
        self.geom.to_spec().merge(&stat).merge(&layer)
    }
}

impl From<GeomOptions> for Layer {
    fn from(geom: GeomOptions) -> Self {
        Layer::new(geom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::geom::{Bar, Pie, Point};

    #[test]
    fn test_minimal_layer_is_geom_spec() {
        let geom = Point::default().build(|m| {
            m.x("a");
        });
        let layer = Layer::new(geom.clone());
        assert_eq!(layer.to_spec(), geom.to_spec());
    }

    #[test]
    fn test_show_legend_only_emitted_when_false() {
        let shown = Layer::new(Point::default().options()).show_legend(true);
        assert!(!shown.to_spec().contains_key("show_legend"));

        let hidden = Layer::new(Point::default().options()).show_legend(false);
        assert_eq!(
            hidden.to_spec().get("show_legend"),
            Some(&OptionValue::Boolean(false))
        );
    }

    #[test]
    fn test_layer_spec_order() {
        let layer = Layer::new(Bar::default().options())
            .stat(StatOptions::count())
            .position(PosOptions::dodge(Some(0.9)))
            .tooltips(tooltips_none());

        let spec = layer.to_spec();
        assert_eq!(
            spec.keys().collect::<Vec<_>>(),
            vec!["geom", "mapping", "stat", "position", "tooltips"]
        );
        let position = spec.get("position").and_then(OptionValue::as_map).unwrap();
        assert_eq!(position.get("width"), Some(&OptionValue::Number(0.9)));
    }

    #[test]
    fn test_annotated_pie() {
        let pie = Pie::default().build(|m| {
            m.fill(as_discrete("name").order_by("..count.."))
                .weight("value");
        });
        let labels = LayerLabels::new(["..proppct.."])
            .format("..proppct..", "{.1f}%")
            .size(15);
        let spec = Layer::new(pie).labels(labels).to_spec();

        let labels = spec.get("labels").and_then(OptionValue::as_map).unwrap();
        assert_eq!(labels.get("annotation_size"), Some(&OptionValue::Integer(15)));
        assert!(spec.contains_key("mapping_annotations"));
    }
}
