use crate::domain::model::{CoordinateFrame, Reading};
use crate::utils::error::Result;

/// Input collector boundary: supplies one raw height per invocation.
/// Whatever constraints the collector enforces, the core re-validates.
pub trait HeightSource {
    fn read_height(&self) -> Result<f64>;
}

/// Renderer boundary: consumes one fully computed reading.
pub trait ReadingSink {
    fn publish(&self, reading: &Reading) -> Result<()>;
}

/// Site configuration boundary: the fixed per-deployment constants.
pub trait SiteProvider {
    fn station_name(&self) -> &str;

    /// Additive constant relating the two frames: absolute = relative + offset.
    fn offset(&self) -> f64;

    /// Inputs below this are classified as relative.
    fn relative_threshold(&self) -> f64;

    /// Inputs above this are classified as absolute.
    fn absolute_threshold(&self) -> f64;

    /// Frame the stage table keys are expressed in.
    fn table_frame(&self) -> CoordinateFrame;
}
