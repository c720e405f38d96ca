use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::model::{CoordinateFrame, StageTable};
use crate::domain::ports::SiteProvider;
use crate::utils::error::{GaugeError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_ordered_band, validate_positive_number, Validate,
};

/// One site survey revision: a static, version-controlled artifact.
/// Each revision is a distinct immutable file, never merged at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub station: StationSection,
    pub gauge: GaugeSection,
    pub table: TableSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationSection {
    pub name: String,
    pub description: Option<String>,
    pub survey: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeSection {
    /// Additive constant relating the frames: absolute = relative + offset.
    pub offset: f64,
    /// Inputs below this are classified as gauge-relative.
    pub relative_threshold: f64,
    /// Inputs above this are classified as absolute.
    pub absolute_threshold: f64,
    /// Frame the stage table keys are expressed in.
    pub frame: CoordinateFrame,
}

/// The stage table source: inline samples or an external CSV file with
/// `height,volume` columns. Exactly one of the two must be set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSection {
    pub samples: Option<Vec<(f64, f64)>>,
    pub csv_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TableRow {
    height: f64,
    volume: f64,
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GaugeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GaugeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Builds the validated stage table. `base_dir` anchors a relative
    /// `csv_path`, normally the directory the config file came from.
    pub fn load_table<P: AsRef<Path>>(&self, base_dir: P) -> Result<StageTable> {
        let samples = match (&self.table.samples, &self.table.csv_path) {
            (Some(samples), None) => samples.clone(),
            (None, Some(csv_path)) => read_csv_table(&base_dir.as_ref().join(csv_path))?,
            (Some(_), Some(_)) => {
                return Err(GaugeError::InvalidConfigValueError {
                    field: "table".to_string(),
                    value: "samples + csv_path".to_string(),
                    reason: "Provide inline samples or a CSV path, not both".to_string(),
                })
            }
            (None, None) => {
                return Err(GaugeError::MissingConfigError {
                    field: "table.samples or table.csv_path".to_string(),
                })
            }
        };
        StageTable::new(samples, self.gauge.frame)
    }
}

fn read_csv_table(path: &Path) -> Result<Vec<(f64, f64)>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut samples = Vec::new();
    for row in reader.deserialize() {
        let row: TableRow = row?;
        samples.push((row.height, row.volume));
    }
    Ok(samples)
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("station.name", &self.station.name)?;
        validate_positive_number("gauge.offset", self.gauge.offset)?;
        validate_ordered_band(
            "gauge.relative_threshold..gauge.absolute_threshold",
            self.gauge.relative_threshold,
            self.gauge.absolute_threshold,
        )?;
        if self.table.samples.is_none() && self.table.csv_path.is_none() {
            return Err(GaugeError::MissingConfigError {
                field: "table.samples or table.csv_path".to_string(),
            });
        }
        Ok(())
    }
}

impl SiteProvider for SiteConfig {
    fn station_name(&self) -> &str {
        &self.station.name
    }

    fn offset(&self) -> f64 {
        self.gauge.offset
    }

    fn relative_threshold(&self) -> f64 {
        self.gauge.relative_threshold
    }

    fn absolute_threshold(&self) -> f64 {
        self.gauge.absolute_threshold
    }

    fn table_frame(&self) -> CoordinateFrame {
        self.gauge.frame
    }
}
