use crate::domain::model::{CurvePoint, StageTable};
use crate::utils::error::{GaugeError, Result};

/// Cumulative stored volume at `height`, linearly interpolated between the
/// two bracketing table samples.
///
/// `height` must already be canonical and inside the table bounds; anything
/// else is an upstream normalization bug and is reported rather than
/// extrapolated. Queries landing exactly on a sample return its volume
/// verbatim.
pub fn volume_at(table: &StageTable, height: f64) -> Result<f64> {
    if !(table.min_height()..=table.max_height()).contains(&height) {
        return Err(GaugeError::OutOfRangeError {
            canonical: height,
            min: table.min_height(),
            max: table.max_height(),
        });
    }

    let points = table.points();
    // Index of the first sample strictly above `height`; the bracket's lower
    // bound sits right before it. Irregular sample spacing works unchanged.
    let idx = points.partition_point(|p| p.height <= height);
    let lower = points[idx - 1];
    if idx == points.len() {
        // At or above the last sample key, which the bounds check limits to
        // exactly the top of the table.
        return Ok(lower.volume);
    }
    let upper = points[idx];

    let fraction = (height - lower.height) / (upper.height - lower.height);
    debug_assert!((0.0..=1.0).contains(&fraction));
    Ok(lower.volume + fraction * (upper.volume - lower.volume))
}

/// Splits the reference curve into the filled portion (heights at or below
/// the query) and the remaining portion (the query onward). The query point
/// belongs to both sequences so the rendered segments share an endpoint
/// instead of leaving a gap.
///
/// Both sequences are freshly built per call from the immutable table.
pub fn partition_curve(
    table: &StageTable,
    height: f64,
    volume: f64,
) -> (Vec<CurvePoint>, Vec<CurvePoint>) {
    let query = CurvePoint { height, volume };

    // Table samples are already ordered, so the query point lands at the end
    // of `filled` and at the front of `remaining` without re-sorting.
    let mut filled: Vec<CurvePoint> = table
        .points()
        .iter()
        .filter(|p| p.height <= height)
        .copied()
        .collect();
    if filled.last().map(|p| p.height) != Some(height) {
        filled.push(query);
    }

    let mut remaining = vec![query];
    remaining.extend(table.points().iter().filter(|p| p.height > height).copied());

    (filled, remaining)
}
