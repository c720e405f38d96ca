use crate::core::pipeline::ReadingPipeline;
use crate::domain::model::Reading;
use crate::domain::ports::{HeightSource, ReadingSink, SiteProvider};
use crate::utils::error::Result;

/// Drives one query through the full chain: collect, compute, publish.
pub struct GaugeEngine<S: HeightSource, K: ReadingSink, C: SiteProvider> {
    source: S,
    sink: K,
    pipeline: ReadingPipeline<C>,
}

impl<S: HeightSource, K: ReadingSink, C: SiteProvider> GaugeEngine<S, K, C> {
    pub fn new(source: S, sink: K, pipeline: ReadingPipeline<C>) -> Self {
        Self {
            source,
            sink,
            pipeline,
        }
    }

    pub fn run(&self) -> Result<Reading> {
        tracing::info!("Collecting gauge input...");
        let raw = self.source.read_height()?;
        tracing::debug!("raw input: {}", raw);

        tracing::info!("Computing stored volume...");
        let reading = self.pipeline.process(raw)?;
        tracing::info!(
            "Interpolated {:.0} cubic meters at {:.3} m above sea level",
            reading.volume,
            reading.above_sea_level
        );

        self.sink.publish(&reading)?;
        Ok(reading)
    }
}
