//! Statistical transformation references
//!
//! Stats are computed by the renderer; a layer only names the stat and passes
//! its parameters through. Parameters are flattened into the layer spec.

use crate::plot::options::options_struct;
use crate::plot::{OptionMap, OptionValue};

/// Statistical transformations a layer can reference by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Identity,
    Count,
    Bin,
    Density,
    Boxplot,
    Sum,
    Smooth,
}

impl StatKind {
    pub fn name(&self) -> &'static str {
        match self {
            StatKind::Identity => "identity",
            StatKind::Count => "count",
            StatKind::Bin => "bin",
            StatKind::Density => "density",
            StatKind::Boxplot => "boxplot",
            StatKind::Sum => "sum",
            StatKind::Smooth => "smooth",
        }
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

options_struct! {
    pub struct BinParameters {
        bins: i64 => "bins",
        binwidth: f64 => "binwidth",
        center: f64 => "center",
        boundary: f64 => "boundary",
    }
}

options_struct! {
    pub struct DensityParameters {
        /// Bandwidth: a number or "nrd0" / "nrd"
        bw: OptionValue => "bw",
        kernel: String => "kernel",
        adjust: f64 => "adjust",
        n: i64 => "n",
        trim: bool => "trim",
    }
}

options_struct! {
    pub struct BoxplotStatParameters {
        /// IQR multiplier for the whisker length
        coef: f64 => "coef",
    }
}

options_struct! {
    pub struct SmoothParameters {
        /// "lm", "loess", "glm" ...
        method: String => "method",
        se: bool => "se",
        level: f64 => "level",
        span: f64 => "span",
        deg: i64 => "deg",
        seed: i64 => "seed",
        max_n: i64 => "max_n",
    }
}

/// A stat reference with its parameters
#[derive(Debug, Clone, PartialEq)]
pub struct StatOptions {
    kind: StatKind,
    parameters: OptionMap,
}

impl StatOptions {
    fn with_parameters(kind: StatKind, parameters: OptionMap) -> Self {
        Self { kind, parameters }
    }

    pub fn identity() -> Self {
        Self::with_parameters(StatKind::Identity, OptionMap::new())
    }

    pub fn count() -> Self {
        Self::with_parameters(StatKind::Count, OptionMap::new())
    }

    pub fn sum() -> Self {
        Self::with_parameters(StatKind::Sum, OptionMap::new())
    }

    pub fn bin(parameters: BinParameters) -> Self {
        Self::with_parameters(StatKind::Bin, parameters.seal())
    }

    pub fn density(parameters: DensityParameters) -> Self {
        Self::with_parameters(StatKind::Density, parameters.seal())
    }

    pub fn boxplot(parameters: BoxplotStatParameters) -> Self {
        Self::with_parameters(StatKind::Boxplot, parameters.seal())
    }

    pub fn smooth(parameters: SmoothParameters) -> Self {
        Self::with_parameters(StatKind::Smooth, parameters.seal())
    }

    pub fn kind(&self) -> StatKind {
        self.kind
    }

    pub fn parameters(&self) -> &OptionMap {
        &self.parameters
    }

    /// `{"stat": name}` followed by the stat parameters
    pub fn to_spec(&self) -> OptionMap {
        let mut spec = OptionMap::new();
        spec.insert("stat", self.kind.name());
        spec.merge(&self.parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_stat() {
        let spec = StatOptions::identity().to_spec();
        assert_eq!(spec.len(), 1);
        assert_eq!(spec.get("stat"), Some(&OptionValue::from("identity")));
    }

    #[test]
    fn test_bin_parameters_are_flattened() {
        let spec = StatOptions::bin(BinParameters::default().bins(20).center(0)).to_spec();
        assert_eq!(
            spec.keys().collect::<Vec<_>>(),
            vec!["stat", "bins", "center"]
        );
        assert_eq!(spec.get("bins"), Some(&OptionValue::Integer(20)));
    }

    #[test]
    fn test_density_bandwidth_name_or_number() {
        let by_name = StatOptions::density(DensityParameters::default().bw("nrd"));
        let by_value = StatOptions::density(DensityParameters::default().bw(0.3));
        assert_eq!(by_name.parameters().get("bw"), Some(&OptionValue::from("nrd")));
        assert_eq!(by_value.parameters().get("bw"), Some(&OptionValue::Number(0.3)));
        assert_eq!(by_name.kind(), StatKind::Density);
    }
}
