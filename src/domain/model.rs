use serde::{Deserialize, Serialize};

use crate::utils::error::{GaugeError, Result};

/// Coordinate frame a height value is expressed in.
///
/// `Absolute` heights are measured above sea level, `Relative` heights from
/// the local gauge zero. The two are related by the per-site constant:
/// `absolute = relative + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateFrame {
    Relative,
    Absolute,
}

/// One sample of the stage-storage curve: water height and the cumulative
/// stored volume up to that height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub height: f64,
    pub volume: f64,
}

/// A raw input height together with its inferred coordinate frame.
/// Built per query during classification and discarded once normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightQuery {
    pub raw: f64,
    pub frame: CoordinateFrame,
}

/// The calibrated stage-storage table of one survey revision.
///
/// Invariants, checked at construction: at least one sample, strictly
/// increasing heights, non-decreasing volumes, all values finite. The first
/// key is the reservoir minimum, the last its maximum. Immutable afterwards.
#[derive(Debug, Clone)]
pub struct StageTable {
    points: Vec<CurvePoint>,
    frame: CoordinateFrame,
}

impl StageTable {
    pub fn new(samples: Vec<(f64, f64)>, frame: CoordinateFrame) -> Result<Self> {
        if samples.is_empty() {
            return Err(GaugeError::TableError {
                message: "stage table has no samples".to_string(),
            });
        }

        for (i, &(height, volume)) in samples.iter().enumerate() {
            if !height.is_finite() || !volume.is_finite() {
                return Err(GaugeError::TableError {
                    message: format!("non-finite sample at row {}", i),
                });
            }
            if i > 0 {
                let (prev_height, prev_volume) = samples[i - 1];
                if height <= prev_height {
                    return Err(GaugeError::TableError {
                        message: format!(
                            "heights must be strictly increasing: row {} has {} after {}",
                            i, height, prev_height
                        ),
                    });
                }
                if volume < prev_volume {
                    return Err(GaugeError::TableError {
                        message: format!(
                            "volumes must be non-decreasing: row {} has {} after {}",
                            i, volume, prev_volume
                        ),
                    });
                }
            }
        }

        let points = samples
            .into_iter()
            .map(|(height, volume)| CurvePoint { height, volume })
            .collect();

        Ok(Self { points, frame })
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn frame(&self) -> CoordinateFrame {
        self.frame
    }

    pub fn min_height(&self) -> f64 {
        self.points[0].height
    }

    pub fn max_height(&self) -> f64 {
        self.points[self.points.len() - 1].height
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Everything the renderer consumes for one query.
///
/// Curve heights are in the table's frame; `axis_domain` is fixed to the
/// table bounds so chart scaling stays constant across queries.
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    pub station: String,
    pub height: f64,
    pub above_sea_level: f64,
    pub volume: f64,
    pub axis_domain: (f64, f64),
    pub filled: Vec<CurvePoint>,
    pub remaining: Vec<CurvePoint>,
}
