pub mod engine;
pub mod interpolate;
pub mod normalize;
pub mod pipeline;

pub use crate::domain::model::{CoordinateFrame, CurvePoint, HeightQuery, Reading, StageTable};
pub use crate::domain::ports::{HeightSource, ReadingSink, SiteProvider};
pub use crate::utils::error::Result;
