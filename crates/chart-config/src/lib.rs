// File: crates/chart-config/src/lib.rs
// Summary: Library entry point; exports the render configuration consumed by XY chart renderers.

pub mod axis;
pub mod builder;
pub mod config;
pub mod error;
mod float_repr;
pub mod labels;
pub mod orientation;
pub mod persist;
pub mod types;
pub mod view;

pub use axis::AxisBounds;
pub use builder::XyRenderConfigBuilder;
pub use config::XyRenderConfig;
pub use error::{ConfigError, Result};
pub use labels::{TextLabel, TextLabels};
pub use orientation::Orientation;
pub use types::UNSET;
pub use view::VisibleRange;
