use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::domain::model::Reading;
use crate::domain::ports::{HeightSource, ReadingSink};
use crate::utils::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "reservoir-gauge")]
#[command(about = "Convert a measured reservoir height into stored volume")]
pub struct CliConfig {
    #[arg(long, default_value = "./config/station.toml")]
    pub config: String,

    #[arg(long, help = "Measured water height, gauge-relative or above sea level")]
    pub height: f64,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Input-collector adapter wrapping the single CLI height argument.
pub struct FixedHeightSource {
    value: f64,
}

impl FixedHeightSource {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl HeightSource for FixedHeightSource {
    fn read_height(&self) -> Result<f64> {
        Ok(self.value)
    }
}

/// Renderer adapter writing the reading to stdout. Volume is rounded to
/// whole cubic meters and heights to three decimals at display time only.
pub struct ConsoleSink {
    format: OutputFormat,
}

impl ConsoleSink {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl ReadingSink for ConsoleSink {
    fn publish(&self, reading: &Reading) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                println!("Station: {}", reading.station);
                println!("Height above sea level: {:.3} m", reading.above_sea_level);
                println!("Stored volume: {:.0} m3", reading.volume);
                println!(
                    "Profile: {} points filled, {} remaining (heights {} to {})",
                    reading.filled.len(),
                    reading.remaining.len(),
                    reading.axis_domain.0,
                    reading.axis_domain.1
                );
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(reading)?);
            }
        }
        Ok(())
    }
}
