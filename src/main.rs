use std::path::Path;

use clap::Parser;
use reservoir_gauge::utils::error::ErrorSeverity;
use reservoir_gauge::utils::{logger, validation::Validate};
use reservoir_gauge::{
    CliConfig, ConsoleSink, FixedHeightSource, GaugeEngine, GaugeError, ReadingPipeline,
    SiteConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting reservoir-gauge CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let site = match load_site(&cli.config) {
        Ok(site) => site,
        Err(e) => exit_with(e),
    };

    let base_dir = Path::new(&cli.config)
        .parent()
        .unwrap_or_else(|| Path::new("."));
    let table = match site.load_table(base_dir) {
        Ok(table) => table,
        Err(e) => exit_with(e),
    };
    tracing::info!(
        "Loaded stage table for {} ({} samples, heights {} to {})",
        site.station.name,
        table.len(),
        table.min_height(),
        table.max_height()
    );

    let pipeline = ReadingPipeline::new(table, site);
    let engine = GaugeEngine::new(
        FixedHeightSource::new(cli.height),
        ConsoleSink::new(cli.format),
        pipeline,
    );

    match engine.run() {
        Ok(_) => {
            tracing::info!("✅ Reading completed successfully");
        }
        Err(e) => exit_with(e),
    }

    Ok(())
}

fn load_site(path: &str) -> reservoir_gauge::Result<SiteConfig> {
    let site = SiteConfig::from_file(path)?;
    site.validate()?;
    Ok(site)
}

fn exit_with(e: GaugeError) -> ! {
    tracing::error!(
        "❌ Reading failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
