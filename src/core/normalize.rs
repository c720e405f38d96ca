use crate::domain::model::{CoordinateFrame, HeightQuery, StageTable};
use crate::domain::ports::SiteProvider;
use crate::utils::error::{GaugeError, Result};

/// Converts raw gauge inputs into the stage table's coordinate frame.
///
/// All constants are captured at construction from the site configuration
/// and the table; normalization itself is pure, so the same raw input always
/// yields the same canonical height.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    offset: f64,
    relative_threshold: f64,
    absolute_threshold: f64,
    table_frame: CoordinateFrame,
    min_height: f64,
    max_height: f64,
}

impl Normalizer {
    pub fn new<C: SiteProvider>(site: &C, table: &StageTable) -> Self {
        Self {
            offset: site.offset(),
            relative_threshold: site.relative_threshold(),
            absolute_threshold: site.absolute_threshold(),
            table_frame: table.frame(),
            min_height: table.min_height(),
            max_height: table.max_height(),
        }
    }

    /// Classifies a raw value as gauge-relative or absolute.
    ///
    /// The band between the two thresholds is a dead zone: a small absolute
    /// height cannot be told apart from an out-of-range relative one, so
    /// classification fails there instead of guessing.
    pub fn classify(&self, raw: f64) -> Result<HeightQuery> {
        let frame = if raw < self.relative_threshold {
            CoordinateFrame::Relative
        } else if raw > self.absolute_threshold {
            CoordinateFrame::Absolute
        } else {
            return Err(GaugeError::AmbiguousInputError {
                value: raw,
                relative_threshold: self.relative_threshold,
                absolute_threshold: self.absolute_threshold,
            });
        };
        Ok(HeightQuery { raw, frame })
    }

    /// Classifies `raw`, converts it into the table frame and validates it
    /// against the table bounds. Out-of-bounds values are rejected, never
    /// clamped.
    pub fn normalize(&self, raw: f64) -> Result<f64> {
        let query = self.classify(raw)?;

        let canonical = match (query.frame, self.table_frame) {
            (CoordinateFrame::Relative, CoordinateFrame::Absolute) => query.raw + self.offset,
            (CoordinateFrame::Absolute, CoordinateFrame::Relative) => query.raw - self.offset,
            _ => query.raw,
        };

        if canonical < self.min_height || canonical > self.max_height {
            return Err(GaugeError::OutOfRangeError {
                canonical,
                min: self.min_height,
                max: self.max_height,
            });
        }
        Ok(canonical)
    }

    /// Height above sea level corresponding to a canonical height.
    pub fn above_sea_level(&self, canonical: f64) -> f64 {
        match self.table_frame {
            CoordinateFrame::Absolute => canonical,
            CoordinateFrame::Relative => canonical + self.offset,
        }
    }
}
