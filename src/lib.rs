/*!
ggspec - declarative plot specifications

ggspec is a typed builder API for describing statistical charts (geometry layers,
aesthetic mappings, scales, annotations and grid composition) as an immutable
options tree. The finished tree is handed to a separate rendering engine; ggspec
itself never draws anything.

# Example

```rust,ignore
use ggspec::plot::geom::{GeomBuilder, Point, PointAesthetics};
use ggspec::plot::{gggrid, lets_plot, GridOptions, Layer};

let point = Point::default()
    .aes(PointAesthetics::default().size(3).color("dark_blue"))
    .build(|m| {
        m.x("year").y("value");
    });

let plot = lets_plot() + Layer::new(point);
let grid = gggrid(vec![Some(plot)], GridOptions::default())?;
println!("{}", grid.to_spec().to_json_pretty()?);
```

# Architecture

- `plot::options` - `OptionMap` and the contribution protocol every builder seals into
- `plot::layer` - mapping builders, capability mixins, geometries, labels, tooltips
- `plot::scale` - scale specifications
- `plot::figure` - plots and grid composition
- `plot::context` - the ambient theme shared by figure builders
- `config` - TOML configuration for the command line tool
*/

pub mod config;
pub mod plot;

// Re-export key types for convenience
pub use plot::{OptionMap, OptionValue};

/// Version of the ggspec crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main library error type
#[derive(thiserror::Error, Debug)]
pub enum GgspecError {
    /// A structural precondition of a builder was violated
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GgspecError>;
