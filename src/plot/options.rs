//! Option maps and the seal/merge protocol
//!
//! Every builder in ggspec ends in an `OptionMap`: an insertion-ordered map from
//! well-known option keys to values. Builders only materialize the keys a
//! caller actually set, and partial maps ("slices") are combined with
//! [`OptionMap::merge`], where the right-hand side wins on collision.
//!
//! # Contributions
//!
//! A contribution is a struct of independently optional fields that seals into
//! a slice. Contributions are declared with `options_struct!`:
//!
//! ```rust,ignore
//! options_struct! {
//!     /// Shared `color_by` option
//!     pub struct WithColorOption {
//!         color_by: String => "color_by",
//!     }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::types::OptionValue;
use crate::Result;

/// Ordered, string-keyed option map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionMap(IndexMap<String, OptionValue>);

impl OptionMap {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Store `value` under `key` only if it is present
    ///
    /// `None` leaves the map untouched; an explicit `OptionValue::Null` is stored.
    pub fn set<K, V>(&mut self, key: K, value: Option<V>) -> &mut Self
    where
        K: Into<String>,
        V: Into<OptionValue>,
    {
        if let Some(value) = value {
            self.0.insert(key.into(), value.into());
        }
        self
    }

    /// Store `value` under `key` unconditionally
    pub fn insert<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<OptionValue>,
    {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Chaining form of [`OptionMap::set`]
    pub fn with<K, V>(mut self, key: K, value: Option<V>) -> Self
    where
        K: Into<String>,
        V: Into<OptionValue>,
    {
        self.set(key, value);
        self
    }

    /// Merge two maps into a new one; keys of `other` win on collision
    ///
    /// Keys keep the position of their first occurrence, so merge is associative
    /// in both values and order.
    pub fn merge(&self, other: &OptionMap) -> OptionMap {
        let mut merged = self.clone();
        for (key, value) in &other.0 {
            merged.0.insert(key.clone(), value.clone());
        }
        merged
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl std::ops::Add for OptionMap {
    type Output = OptionMap;

    fn add(self, rhs: OptionMap) -> OptionMap {
        self.merge(&rhs)
    }
}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for OptionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a OptionMap {
    type Item = (&'a String, &'a OptionValue);
    type IntoIter = indexmap::map::Iter<'a, String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Merge slices in order; later slices override earlier keys
pub fn compose<I>(slices: I) -> OptionMap
where
    I: IntoIterator<Item = OptionMap>,
{
    slices
        .into_iter()
        .fold(OptionMap::new(), |acc, slice| acc.merge(&slice))
}

/// Returns the first key owned by more than one key set, if any
pub fn find_shared_key(key_sets: &[&'static [&'static str]]) -> Option<&'static str> {
    for (i, keys) in key_sets.iter().enumerate() {
        for key in keys.iter() {
            if key_sets[i + 1..].iter().any(|other| other.contains(key)) {
                return Some(key);
            }
        }
    }
    None
}

/// Declare a contribution: a struct of optional fields that seals into an option slice
///
/// Generates the struct (all fields `Option<T>`), chaining setters named after
/// the fields, `KEYS` and `seal()`.
macro_rules! options_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident: $ty:ty => $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            /// Option keys this contribution owns, in seal order
            pub const KEYS: &'static [&'static str] = &[$($key),*];

            $(
                $(#[$fmeta])*
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*

            /// Seal the fields that were set into an option slice
            pub fn seal(&self) -> $crate::plot::OptionMap {
                let mut options = $crate::plot::OptionMap::new();
                $(
                    options.set($key, self.$field.clone());
                )*
                options
            }
        }
    };
}

pub(crate) use options_struct;
