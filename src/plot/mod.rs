//! Plot specification types for ggspec
//!
//! This module contains every builder that assembles a plot specification,
//! from the leaf `OptionMap` up to composite grid figures.
//!
//! # Architecture
//!
//! The module is organized into submodules:
//!
//! - `types` - Value types: OptionValue, Color, LineType, Shape
//! - `options` - OptionMap and the contribution/seal protocol
//! - `layer` - Layer struct, mapping builders, mixins, geoms and labels
//! - `scale` - Scale specifications
//! - `figure` - Plot and grid (subplots) figures
//! - `context` - Ambient theme captured by figure builders

pub mod context;
pub mod figure;
pub mod layer;
pub mod options;
pub mod scale;
pub mod types;

// Re-export all types for convenience
pub use figure::*;
pub use layer::*;
pub use options::*;
pub use scale::*;
pub use types::*;
