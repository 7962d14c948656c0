//! Aesthetic mapping builders
//!
//! Each geometry has its own mapping struct with one slot per aesthetic it can
//! bind to data. The caller fills the slots inside a single configuration
//! callback; the builder is then sealed into an `OptionMap` of only the
//! aesthetics that were assigned.

use crate::plot::{OptionMap, OptionValue};

/// Source of data for an aesthetic binding
#[derive(Debug, Clone, PartialEq)]
pub enum MappingValue {
    /// A data column (or stat variable such as `..count..`)
    Column(String),
    /// A column treated as discrete data
    Discrete(DiscreteMapping),
}

impl MappingValue {
    /// The column this binding reads
    pub fn column(&self) -> &str {
        match self {
            MappingValue::Column(name) => name,
            MappingValue::Discrete(discrete) => &discrete.column,
        }
    }
}

impl From<&str> for MappingValue {
    fn from(value: &str) -> Self {
        MappingValue::Column(value.to_string())
    }
}

impl From<String> for MappingValue {
    fn from(value: String) -> Self {
        MappingValue::Column(value)
    }
}

impl From<DiscreteMapping> for MappingValue {
    fn from(value: DiscreteMapping) -> Self {
        MappingValue::Discrete(value)
    }
}

/// A column marked as discrete, with optional ordering
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteMapping {
    pub column: String,
    pub label: Option<String>,
    pub order_by: Option<String>,
    /// 1 for ascending, -1 for descending
    pub order: Option<i64>,
}

impl DiscreteMapping {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn order_by(mut self, variable: impl Into<String>) -> Self {
        self.order_by = Some(variable.into());
        self
    }

    pub fn order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    fn parameters(&self) -> OptionMap {
        OptionMap::new()
            .with("label", self.label.clone())
            .with("order_by", self.order_by.clone())
            .with("order", self.order)
    }
}

/// Mark a column as discrete data
pub fn as_discrete(column: impl Into<String>) -> DiscreteMapping {
    DiscreteMapping {
        column: column.into(),
        label: None,
        order_by: None,
        order: None,
    }
}

/// Behavior shared by all mapping builders
pub trait AesMapping: Default {
    /// Aesthetics this builder accepts, in seal order
    const AESTHETICS: &'static [&'static str];

    /// Currently assigned bindings, in seal order
    fn bindings(&self) -> Vec<(&'static str, &MappingValue)>;

    /// Seal assigned aesthetics into an option map (aesthetic -> column)
    fn seal(&self) -> OptionMap {
        let mut options = OptionMap::new();
        for (aes, value) in self.bindings() {
            options.insert(aes, value.column());
        }
        options
    }

    /// Annotations for bindings that carry more than a column name
    fn annotations(&self) -> Vec<OptionValue> {
        self.bindings()
            .into_iter()
            .filter_map(|(aes, value)| match value {
                MappingValue::Discrete(discrete) => {
                    let mut annotation = OptionMap::new();
                    annotation
                        .insert("aes", aes)
                        .insert("annotation", "as_discrete")
                        .insert("parameters", discrete.parameters());
                    Some(OptionValue::Map(annotation))
                }
                MappingValue::Column(_) => None,
            })
            .collect()
    }
}

/// Declare a mapping builder with a fixed set of aesthetic slots
macro_rules! mapping_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($field:ident => $key:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $($field: Option<$crate::plot::layer::mapping::MappingValue>,)*
        }

        impl $name {
            $(
                pub fn $field(
                    &mut self,
                    value: impl Into<$crate::plot::layer::mapping::MappingValue>,
                ) -> &mut Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }

        impl $crate::plot::layer::mapping::AesMapping for $name {
            const AESTHETICS: &'static [&'static str] = &[$($key),*];

            fn bindings(&self) -> Vec<(&'static str, &$crate::plot::layer::mapping::MappingValue)> {
                let mut bound = Vec::new();
                $(
                    if let Some(value) = &self.$field {
                        bound.push(($key, value));
                    }
                )*
                bound
            }
        }
    };
}

pub(crate) use mapping_struct;

mapping_struct! {
    /// Plot-level mapping, inherited by layers
    pub struct PlotMapping {
        x => "x",
        y => "y",
        alpha => "alpha",
        color => "color",
        fill => "fill",
        shape => "shape",
        size => "size",
        linetype => "linetype",
        label => "label",
        weight => "weight",
        group => "group",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mapping_struct! {
        struct SampleMapping {
            x => "x",
            fill => "fill",
            group => "group",
        }
    }

    #[test]
    fn test_seal_only_assigned() {
        let mut mapping = SampleMapping::default();
        mapping.x("year");

        let sealed = mapping.seal();
        assert_eq!(sealed.len(), 1);
        assert_eq!(sealed.get("x"), Some(&OptionValue::from("year")));
        assert!(mapping.annotations().is_empty());
    }

    #[test]
    fn test_rebinding_overwrites() {
        let mut mapping = SampleMapping::default();
        mapping.x("a").x("b");
        assert_eq!(mapping.seal().get("x"), Some(&OptionValue::from("b")));
    }

    #[test]
    fn test_seal_is_idempotent() {
        let mut mapping = SampleMapping::default();
        mapping.x("a").group("g");
        assert_eq!(mapping.seal(), mapping.seal());
        assert_eq!(SampleMapping::AESTHETICS, &["x", "fill", "group"]);
    }

    #[test]
    fn test_discrete_annotation() {
        let mut mapping = SampleMapping::default();
        mapping.fill(as_discrete("name").order_by("..count..").order(-1));

        let sealed = mapping.seal();
        assert_eq!(sealed.get("fill"), Some(&OptionValue::from("name")));

        let annotations = mapping.annotations();
        assert_eq!(annotations.len(), 1);
        let annotation = annotations[0].as_map().unwrap();
        assert_eq!(annotation.get("aes"), Some(&OptionValue::from("fill")));
        assert_eq!(
            annotation.get("annotation"),
            Some(&OptionValue::from("as_discrete"))
        );
        let parameters = annotation.get("parameters").and_then(|p| p.as_map()).unwrap();
        assert_eq!(parameters.get("order"), Some(&OptionValue::Integer(-1)));
        assert!(!parameters.contains_key("label"));
    }
}
