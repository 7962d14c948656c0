//! Grid layout of several figures
//!
//! `gggrid` arranges figures row by row in a regular grid. The figure list is
//! padded with empty cells so that it always fills `ncol * nrow` cells.

use std::sync::Arc;

use super::Figure;
use crate::plot::context;
use crate::plot::{OptionMap, OptionValue};
use crate::{GgspecError, Result};

/// Name of the grid layout
pub const SUBPLOTS_GRID: &str = "grid";
pub const SHARE_ALL: &str = "all";
pub const SHARE_NONE: &str = "none";

/// Scale sharing between subplots
///
/// `true` shares between all subplots, `false` between none. A mode string
/// ("all", "none", "row", "col") is passed through as given.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleShare {
    Flag(bool),
    Mode(String),
}

impl ScaleShare {
    pub fn as_option(&self) -> String {
        match self {
            ScaleShare::Flag(true) => SHARE_ALL.to_string(),
            ScaleShare::Flag(false) => SHARE_NONE.to_string(),
            ScaleShare::Mode(mode) => mode.clone(),
        }
    }
}

impl From<bool> for ScaleShare {
    fn from(value: bool) -> Self {
        ScaleShare::Flag(value)
    }
}

impl From<&str> for ScaleShare {
    fn from(value: &str) -> Self {
        ScaleShare::Mode(value.to_string())
    }
}

impl From<String> for ScaleShare {
    fn from(value: String) -> Self {
        ScaleShare::Mode(value)
    }
}

/// Layout parameters of [`gggrid`]
#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    /// Number of columns; all figures in one row when unset
    pub ncol: Option<usize>,
    /// Relative column widths, left to right
    pub widths: Option<Vec<f64>>,
    /// Relative row heights, top-down
    pub heights: Option<Vec<f64>>,
    /// Horizontal cell spacing in px
    pub hspace: Option<f64>,
    /// Vertical cell spacing in px
    pub vspace: Option<f64>,
    /// Stretch each plot to the aspect ratio of its cell
    pub fit: bool,
    /// Align the inner areas of the plots
    pub align: bool,
    pub sharex: Option<ScaleShare>,
    pub sharey: Option<ScaleShare>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            ncol: None,
            widths: None,
            heights: None,
            hspace: None,
            vspace: None,
            fit: true,
            align: false,
            sharex: None,
            sharey: None,
        }
    }
}

impl GridOptions {
    pub fn ncol(mut self, ncol: usize) -> Self {
        self.ncol = Some(ncol);
        self
    }

    pub fn widths(mut self, widths: Vec<f64>) -> Self {
        self.widths = Some(widths);
        self
    }

    pub fn heights(mut self, heights: Vec<f64>) -> Self {
        self.heights = Some(heights);
        self
    }

    pub fn hspace(mut self, hspace: f64) -> Self {
        self.hspace = Some(hspace);
        self
    }

    pub fn vspace(mut self, vspace: f64) -> Self {
        self.vspace = Some(vspace);
        self
    }

    pub fn fit(mut self, fit: bool) -> Self {
        self.fit = fit;
        self
    }

    pub fn align(mut self, align: bool) -> Self {
        self.align = align;
        self
    }

    pub fn sharex(mut self, share: impl Into<ScaleShare>) -> Self {
        self.sharex = Some(share.into());
        self
    }

    pub fn sharey(mut self, share: impl Into<ScaleShare>) -> Self {
        self.sharey = Some(share.into());
        self
    }
}

/// Layout part of a composite figure
#[derive(Debug, Clone, PartialEq)]
pub struct SubPlotsLayoutSpec {
    name: String,
    options: OptionMap,
}

impl SubPlotsLayoutSpec {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &OptionMap {
        &self.options
    }

    pub fn to_spec(&self) -> OptionMap {
        let mut spec = OptionMap::new();
        spec.insert("name", self.name.as_str());
        spec.merge(&self.options)
    }
}

/// Composite figure: child figures plus their layout
#[derive(Debug, Clone, PartialEq)]
pub struct SubPlotsFigure {
    figures: Vec<Option<Figure>>,
    layout: SubPlotsLayoutSpec,
    features: Vec<Arc<OptionMap>>,
}

impl SubPlotsFigure {
    /// Child figures in row-major order; `None` is an empty cell
    pub fn figures(&self) -> &[Option<Figure>] {
        &self.figures
    }

    pub fn layout(&self) -> &SubPlotsLayoutSpec {
        &self.layout
    }

    /// Presentation features captured at build time
    pub fn features(&self) -> &[Arc<OptionMap>] {
        &self.features
    }

    pub fn to_spec(&self) -> OptionMap {
        let figures: Vec<OptionValue> = self
            .figures
            .iter()
            .map(|cell| match cell {
                Some(figure) => OptionValue::Map(figure.to_spec()),
                None => OptionValue::Null,
            })
            .collect();

        let theme = self
            .features
            .iter()
            .fold(OptionMap::new(), |acc, feature| acc.merge(feature));

        let mut spec = OptionMap::new();
        spec.insert("kind", "subplots")
            .insert("layout", self.layout.to_spec())
            .insert("figures", figures)
            .set("theme", (!theme.is_empty()).then_some(theme));
        spec
    }
}

/// Combine several figures in a regular grid
///
/// Fails with `InvalidArgument` when `plots` is empty or `ncol` is zero.
///
/// ```rust,ignore
/// let grid = gggrid(
///     vec![Some(p1), Some(p2), Some(p3)],
///     GridOptions::default().ncol(2).sharex(true),
/// )?;
/// assert_eq!(grid.figures().len(), 4);
/// ```
pub fn gggrid<I, F>(plots: I, options: GridOptions) -> Result<SubPlotsFigure>
where
    I: IntoIterator<Item = Option<F>>,
    F: Into<Figure>,
{
    let plots: Vec<Option<Figure>> = plots
        .into_iter()
        .map(|cell| cell.map(Into::into))
        .collect();
    if plots.is_empty() {
        return Err(GgspecError::InvalidArgument(
            "Subplots list is empty".to_string(),
        ));
    }

    let (ncol, nrow) = match options.ncol {
        None => (plots.len(), 1),
        Some(0) => {
            return Err(GgspecError::InvalidArgument(
                "ncol must be a positive number".to_string(),
            ))
        }
        Some(ncol) => (ncol, plots.len().div_ceil(ncol)),
    };

    let layout_options = OptionMap::new()
        .with("ncol", Some(ncol))
        .with("nrow", Some(nrow))
        .with("sharex", options.sharex.as_ref().map(ScaleShare::as_option))
        .with("sharey", options.sharey.as_ref().map(ScaleShare::as_option))
        .with("widths", options.widths)
        .with("heights", options.heights)
        .with("hspace", options.hspace)
        .with("vspace", options.vspace)
        .with("fit", Some(options.fit))
        .with("align", Some(options.align));

    let len = ncol * nrow;
    let count = plots.len();
    let figures: Vec<Option<Figure>> = plots
        .into_iter()
        .chain(std::iter::repeat_with(|| None).take(ncol - 1))
        .take(len)
        .collect();

    let features: Vec<Arc<OptionMap>> = context::theme().into_iter().collect();

    tracing::debug!(
        figures = count,
        ncol,
        nrow,
        empty_cells = len - count,
        "Laid out subplots grid"
    );

    Ok(SubPlotsFigure {
        figures,
        layout: SubPlotsLayoutSpec {
            name: SUBPLOTS_GRID.to_string(),
            options: layout_options,
        },
        features,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::figure::{lets_plot, Plot};
    use crate::plot::geom::{GeomBuilder, Point};

    fn plots(n: usize) -> Vec<Option<Plot>> {
        (0..n)
            .map(|_| Some(lets_plot() + Point::default().options()))
            .collect()
    }

    #[test]
    fn test_three_plots_two_columns() {
        let grid = gggrid(plots(3), GridOptions::default().ncol(2)).unwrap();
        let layout = grid.layout().options();

        assert_eq!(layout.get("ncol"), Some(&OptionValue::Integer(2)));
        assert_eq!(layout.get("nrow"), Some(&OptionValue::Integer(2)));
        assert_eq!(grid.figures().len(), 4);
        assert!(grid.figures()[..3].iter().all(Option::is_some));
        assert!(grid.figures()[3].is_none());
    }

    #[test]
    fn test_single_row_by_default() {
        let grid = gggrid(plots(3), GridOptions::default()).unwrap();
        let layout = grid.layout().options();
        assert_eq!(layout.get("ncol"), Some(&OptionValue::Integer(3)));
        assert_eq!(layout.get("nrow"), Some(&OptionValue::Integer(1)));
        assert_eq!(grid.figures().len(), 3);
    }

    #[test]
    fn test_invalid_input() {
        let empty = gggrid(Vec::<Option<Plot>>::new(), GridOptions::default().ncol(2));
        assert!(matches!(empty, Err(GgspecError::InvalidArgument(_))));

        let zero = gggrid(plots(2), GridOptions::default().ncol(0));
        assert!(matches!(zero, Err(GgspecError::InvalidArgument(_))));
    }

    #[test]
    fn test_scale_share_normalization() {
        let grid = gggrid(
            plots(2),
            GridOptions::default().sharex(true).sharey(false),
        )
        .unwrap();
        let layout = grid.layout().options();
        assert_eq!(layout.get("sharex"), Some(&OptionValue::from("all")));
        assert_eq!(layout.get("sharey"), Some(&OptionValue::from("none")));

        let grid = gggrid(plots(2), GridOptions::default().sharex("row")).unwrap();
        let layout = grid.layout().options();
        assert_eq!(layout.get("sharex"), Some(&OptionValue::from("row")));
        assert!(!layout.contains_key("sharey"));
    }

    #[test]
    fn test_layout_key_order_and_defaults() {
        let grid = gggrid(
            plots(1),
            GridOptions::default().widths(vec![1.0]).vspace(8.0),
        )
        .unwrap();
        let spec = grid.layout().to_spec();
        assert_eq!(
            spec.keys().collect::<Vec<_>>(),
            vec!["name", "ncol", "nrow", "widths", "vspace", "fit", "align"]
        );
        assert_eq!(spec.get("fit"), Some(&OptionValue::Boolean(true)));
        assert_eq!(spec.get("align"), Some(&OptionValue::Boolean(false)));
    }

    #[test]
    fn test_explicit_empty_cells_and_nesting() {
        let inner = gggrid(plots(2), GridOptions::default()).unwrap();
        let cells: Vec<Option<Figure>> = vec![
            Some(inner.into()),
            None,
            Some((lets_plot() + Point::default().options()).into()),
        ];
        let outer = gggrid(cells, GridOptions::default().ncol(2)).unwrap();

        let spec = outer.to_spec();
        let figures = spec.get("figures").and_then(OptionValue::as_array).unwrap();
        assert_eq!(figures.len(), 4);
        assert_eq!(figures[1], OptionValue::Null);
        assert_eq!(figures[3], OptionValue::Null);
        let nested = figures[0].as_map().unwrap();
        assert_eq!(nested.get("kind"), Some(&OptionValue::from("subplots")));
    }

    #[test]
    fn test_theme_captured_by_reference() {
        let _guard = context::test_lock();
        context::set_theme(OptionMap::new().with("name", Some("classic")));
        let grid = gggrid(plots(1), GridOptions::default()).unwrap();
        let current = context::theme().unwrap();
        context::clear_theme();

        assert_eq!(grid.features().len(), 1);
        assert!(Arc::ptr_eq(&grid.features()[0], &current));
        let spec = grid.to_spec();
        assert_eq!(
            spec.keys().collect::<Vec<_>>(),
            vec!["kind", "layout", "figures", "theme"]
        );
    }

    #[test]
    fn test_identical_arguments_serialize_identically() {
        let make = || {
            gggrid(plots(3), GridOptions::default().ncol(2).hspace(4.0))
                .and_then(|grid| grid.to_spec().to_json())
                .unwrap()
        };
        let _guard = context::test_lock();
        assert_eq!(make(), make());
    }
}
