//! Position adjustments
//!
//! A position without parameters is emitted as its bare name; with parameters
//! it becomes a map carrying a `name` key.

use crate::plot::{OptionMap, OptionValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosKind {
    Identity,
    Stack,
    Fill,
    Dodge,
    Jitter,
    Nudge,
    JitterDodge,
}

impl PosKind {
    pub fn name(&self) -> &'static str {
        match self {
            PosKind::Identity => "identity",
            PosKind::Stack => "stack",
            PosKind::Fill => "fill",
            PosKind::Dodge => "dodge",
            PosKind::Jitter => "jitter",
            PosKind::Nudge => "nudge",
            PosKind::JitterDodge => "jitterdodge",
        }
    }
}

/// A position adjustment with its parameters
#[derive(Debug, Clone, PartialEq)]
pub struct PosOptions {
    kind: PosKind,
    parameters: OptionMap,
}

impl PosOptions {
    fn new(kind: PosKind, parameters: OptionMap) -> Self {
        Self { kind, parameters }
    }

    pub fn identity() -> Self {
        Self::new(PosKind::Identity, OptionMap::new())
    }

    /// Stack overlapping objects on top of each other
    ///
    /// `mode` is "groups" or "all".
    pub fn stack(vjust: Option<f64>, mode: Option<&str>) -> Self {
        Self::new(
            PosKind::Stack,
            OptionMap::new().with("vjust", vjust).with("mode", mode),
        )
    }

    /// Stack and normalize to equal height
    pub fn fill(vjust: Option<f64>, mode: Option<&str>) -> Self {
        Self::new(
            PosKind::Fill,
            OptionMap::new().with("vjust", vjust).with("mode", mode),
        )
    }

    pub fn dodge(width: Option<f64>) -> Self {
        Self::new(PosKind::Dodge, OptionMap::new().with("width", width))
    }

    pub fn jitter(width: Option<f64>, height: Option<f64>, seed: Option<i64>) -> Self {
        Self::new(
            PosKind::Jitter,
            OptionMap::new()
                .with("width", width)
                .with("height", height)
                .with("seed", seed),
        )
    }

    /// Shift by a fixed offset; `unit` is "identity", "size" or "px"
    pub fn nudge(x: Option<f64>, y: Option<f64>, unit: Option<&str>) -> Self {
        Self::new(
            PosKind::Nudge,
            OptionMap::new().with("x", x).with("y", y).with("unit", unit),
        )
    }

    pub fn jitterdodge(
        dodge_width: Option<f64>,
        jitter_width: Option<f64>,
        jitter_height: Option<f64>,
        seed: Option<i64>,
    ) -> Self {
        Self::new(
            PosKind::JitterDodge,
            OptionMap::new()
                .with("dodge_width", dodge_width)
                .with("jitter_width", jitter_width)
                .with("jitter_height", jitter_height)
                .with("seed", seed),
        )
    }

    pub fn kind(&self) -> PosKind {
        self.kind
    }

    /// Value stored under the layer's `position` key
    pub fn to_value(&self) -> OptionValue {
        if self.parameters.is_empty() {
            return OptionValue::from(self.kind.name());
        }
        let mut named = OptionMap::new();
        named.insert("name", self.kind.name());
        OptionValue::Map(named.merge(&self.parameters))
    }
}
