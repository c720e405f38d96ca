pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, ConsoleSink, FixedHeightSource, OutputFormat};
pub use config::site::SiteConfig;
pub use core::{engine::GaugeEngine, pipeline::ReadingPipeline};
pub use domain::model::{CoordinateFrame, CurvePoint, Reading, StageTable};
pub use utils::error::{GaugeError, Result};
