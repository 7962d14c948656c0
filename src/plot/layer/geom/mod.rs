//! Geometry option builders
//!
//! Each geometry is a struct of *contributions* (an aesthetics group, optional
//! parameter groups and capability mixins) listed in a fixed composition order.
//! Building a geometry seals every contribution and merges the slices in that
//! order, runs the mapping callback against a fresh mapping builder, and
//! returns a `GeomOptions` tagged with the geometry's `GeomKind`.
//!
//! # Example
//!
//! ```rust,ignore
//! use ggspec::plot::geom::{GeomBuilder, Point, PointAesthetics};
//!
//! let options = Point::default()
//!     .aes(PointAesthetics::default().size(4).shape(21))
//!     .fill_by("color")
//!     .build(|m| {
//!         m.x("cty").y("hwy").color("class");
//!     });
//! ```

use crate::plot::layer::mapping::AesMapping;
use crate::plot::options::compose;
use crate::plot::OptionMap;

mod area;
mod bar;
mod boxplot;
mod errorbar;
mod label;
mod line;
mod lollipop;
mod path;
mod pie;
mod point;
mod polygon;
mod qq;
mod rect;
mod reference;
mod ribbon;
mod segment;
mod text;
mod tile;
mod types;

pub use area::*;
pub use bar::*;
pub use boxplot::*;
pub use errorbar::*;
pub use label::*;
pub use line::*;
pub use lollipop::*;
pub use path::*;
pub use pie::*;
pub use point::*;
pub use polygon::*;
pub use qq::*;
pub use rect::*;
pub use reference::*;
pub use ribbon::*;
pub use segment::*;
pub use text::*;
pub use tile::*;
pub use types::{GeomKind, GeomOptions};

/// Shared construction protocol of all geometries
pub trait GeomBuilder: Sized {
    /// Mapping builder handed to the configuration callback
    type Mapping: AesMapping;

    fn geom_kind(&self) -> GeomKind;

    /// Sealed contribution slices, in composition order
    fn contributions(&self) -> Vec<OptionMap>;

    /// Key sets of the contributions, in composition order
    fn contribution_keys() -> Vec<&'static [&'static str]>;

    /// Merge the contribution slices; later slices win on collision
    fn seal(&self) -> OptionMap {
        compose(self.contributions())
    }

    /// Run the mapping callback and seal everything into `GeomOptions`
    fn build<F>(self, mapping: F) -> GeomOptions
    where
        F: FnOnce(&mut Self::Mapping),
    {
        #[cfg(debug_assertions)]
        if let Some(key) = crate::plot::options::find_shared_key(&Self::contribution_keys()) {
            panic!(
                "contributions of geom '{}' share option key '{}'",
                self.geom_kind(),
                key
            );
        }

        let mut builder = Self::Mapping::default();
        mapping(&mut builder);

        let options = GeomOptions::new(
            self.geom_kind(),
            builder.seal(),
            builder.annotations(),
            self.seal(),
        );
        tracing::debug!(
            geom = %options.kind(),
            mapped = options.mapping().len(),
            parameters = options.parameters().len(),
            "Built geom options"
        );
        options
    }

    /// Build without any data mapping
    fn options(self) -> GeomOptions {
        self.build(|_| {})
    }
}

/// Declare a geometry as an ordered list of contributions
macro_rules! geom {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $kind:ident, $mapping:ty {
            $(
                $(#[$fmeta:meta])*
                $field:ident: $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        impl $name {
            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = value.into();
                    self
                }
            )*
        }

        impl $crate::plot::layer::geom::GeomBuilder for $name {
            type Mapping = $mapping;

            fn geom_kind(&self) -> $crate::plot::layer::geom::GeomKind {
                $crate::plot::layer::geom::GeomKind::$kind
            }

            fn contributions(&self) -> Vec<$crate::plot::OptionMap> {
                vec![$(self.$field.seal()),*]
            }

            fn contribution_keys() -> Vec<&'static [&'static str]> {
                vec![$(<$ty>::KEYS),*]
            }
        }
    };
}

pub(crate) use geom;
