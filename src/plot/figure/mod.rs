//! Figures: single plots and composite grids
//!
//! A [`Plot`] is assembled with `+` from layers and scales. Figures can be
//! nested in a grid (see [`gggrid`]). Every figure serializes to one option
//! map with a `kind` key.

mod grid;

pub use grid::{gggrid, GridOptions, ScaleShare, SubPlotsFigure, SubPlotsLayoutSpec};

use std::ops::Add;
use std::sync::Arc;

use crate::plot::context;
use crate::plot::layer::{AesMapping, GeomOptions, Layer, PlotMapping};
use crate::plot::{OptionMap, OptionValue, Scale};

/// A single plot
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    mapping: PlotMapping,
    layers: Vec<Layer>,
    scales: Vec<Scale>,
    ambient_theme: Option<Arc<OptionMap>>,
    theme: OptionMap,
}

/// Start a new plot, capturing the ambient theme
pub fn lets_plot() -> Plot {
    Plot {
        mapping: PlotMapping::default(),
        layers: Vec::new(),
        scales: Vec::new(),
        ambient_theme: context::theme(),
        theme: OptionMap::new(),
    }
}

impl Plot {
    /// Plot-level mapping, inherited by every layer
    pub fn with_mapping<F>(mut self, configure: F) -> Self
    where
        F: FnOnce(&mut PlotMapping),
    {
        configure(&mut self.mapping);
        self
    }

    /// Theme options of this plot; merged over the ambient theme
    pub fn theme(mut self, theme: OptionMap) -> Self {
        self.theme = self.theme.merge(&theme);
        self
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn scales(&self) -> &[Scale] {
        &self.scales
    }

    fn effective_theme(&self) -> Option<OptionMap> {
        match &self.ambient_theme {
            Some(ambient) => Some(ambient.merge(&self.theme)),
            None if !self.theme.is_empty() => Some(self.theme.clone()),
            None => None,
        }
    }

    pub fn to_spec(&self) -> OptionMap {
        let annotations = self.mapping.annotations();
        let layers: Vec<OptionValue> = self
            .layers
            .iter()
            .map(|layer| OptionValue::Map(layer.to_spec()))
            .collect();
        let scales: Vec<OptionValue> = self
            .scales
            .iter()
            .map(|scale| OptionValue::Map(scale.to_spec()))
            .collect();

        let mut spec = OptionMap::new();
        spec.insert("kind", "plot").insert("mapping", self.mapping.seal());
        spec.set(
            "mapping_annotations",
            (!annotations.is_empty()).then_some(annotations),
        );
        spec.insert("layers", layers)
            .insert("scales", scales)
            .set("theme", self.effective_theme());
        spec
    }
}

impl Add<Layer> for Plot {
    type Output = Plot;

    fn add(mut self, layer: Layer) -> Plot {
        self.layers.push(layer);
        self
    }
}

impl Add<GeomOptions> for Plot {
    type Output = Plot;

    fn add(self, geom: GeomOptions) -> Plot {
        self + Layer::new(geom)
    }
}

impl Add<Scale> for Plot {
    type Output = Plot;

    fn add(mut self, scale: Scale) -> Plot {
        self.scales.push(scale);
        self
    }
}

/// Anything that can occupy a grid cell
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Plot(Plot),
    SubPlots(SubPlotsFigure),
}

impl Figure {
    pub fn to_spec(&self) -> OptionMap {
        match self {
            Figure::Plot(plot) => plot.to_spec(),
            Figure::SubPlots(subplots) => subplots.to_spec(),
        }
    }
}

impl From<Plot> for Figure {
    fn from(plot: Plot) -> Self {
        Figure::Plot(plot)
    }
}

impl From<SubPlotsFigure> for Figure {
    fn from(subplots: SubPlotsFigure) -> Self {
        Figure::SubPlots(subplots)
    }
}
