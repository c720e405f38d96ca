use crate::core::interpolate;
use crate::core::normalize::Normalizer;
use crate::domain::model::{Reading, StageTable};
use crate::domain::ports::SiteProvider;
use crate::utils::error::Result;

/// The one-way query computation: raw height in, volume and curves out.
///
/// Holds the only shared state of the process, the immutable table and the
/// site constants; every `process` call is an independent pure computation.
pub struct ReadingPipeline<C: SiteProvider> {
    table: StageTable,
    config: C,
    normalizer: Normalizer,
}

impl<C: SiteProvider> ReadingPipeline<C> {
    pub fn new(table: StageTable, config: C) -> Self {
        let normalizer = Normalizer::new(&config, &table);
        Self {
            table,
            config,
            normalizer,
        }
    }

    pub fn process(&self, raw: f64) -> Result<Reading> {
        let canonical = self.normalizer.normalize(raw)?;
        tracing::debug!("normalized input {} to canonical height {}", raw, canonical);

        let volume = interpolate::volume_at(&self.table, canonical)?;
        let (filled, remaining) = interpolate::partition_curve(&self.table, canonical, volume);

        Ok(Reading {
            station: self.config.station_name().to_string(),
            height: canonical,
            above_sea_level: self.normalizer.above_sea_level(canonical),
            volume,
            axis_domain: (self.table.min_height(), self.table.max_height()),
            filled,
            remaining,
        })
    }

    pub fn table(&self) -> &StageTable {
        &self.table
    }
}
