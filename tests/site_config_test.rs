use anyhow::Result;
use reservoir_gauge::utils::validation::Validate;
use reservoir_gauge::{CoordinateFrame, GaugeError, SiteConfig};
use tempfile::TempDir;

fn site_toml(gauge: &str, table: &str) -> String {
    format!(
        r#"
[station]
name = "Test reservoir"

[gauge]
{}

[table]
{}
"#,
        gauge, table
    )
}

const VALID_GAUGE: &str = r#"offset = 50.608
relative_threshold = 10.0
absolute_threshold = 50.0
frame = "absolute""#;

#[test]
fn test_parse_inline_site() -> Result<()> {
    let content = site_toml(VALID_GAUGE, "samples = [[51.5, 4000.0], [52.0, 11628.0]]");
    let site = SiteConfig::from_toml_str(&content)?;
    site.validate()?;

    assert_eq!(site.station.name, "Test reservoir");
    assert_eq!(site.gauge.offset, 50.608);
    assert_eq!(site.gauge.frame, CoordinateFrame::Absolute);

    let table = site.load_table(".")?;
    assert_eq!(table.len(), 2);
    assert_eq!(table.min_height(), 51.5);
    assert_eq!(table.max_height(), 52.0);
    Ok(())
}

#[test]
fn test_csv_table_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("table.csv"),
        "height,volume\n51.5,4000\n52.0,11628\n52.5,27317\n",
    )?;
    let config_path = temp_dir.path().join("site.toml");
    std::fs::write(&config_path, site_toml(VALID_GAUGE, "csv_path = \"table.csv\""))?;

    let site = SiteConfig::from_file(&config_path)?;
    site.validate()?;
    let table = site.load_table(temp_dir.path())?;

    assert_eq!(table.len(), 3);
    assert_eq!(table.points()[1].volume, 11628.0);
    Ok(())
}

#[test]
fn test_rejects_empty_station_name() -> Result<()> {
    let content = site_toml(VALID_GAUGE, "samples = [[51.5, 4000.0]]")
        .replace("Test reservoir", "  ");
    let site = SiteConfig::from_toml_str(&content)?;
    assert!(matches!(
        site.validate(),
        Err(GaugeError::InvalidConfigValueError { .. })
    ));
    Ok(())
}

#[test]
fn test_rejects_non_positive_offset() -> Result<()> {
    let gauge = r#"offset = -1.0
relative_threshold = 10.0
absolute_threshold = 50.0
frame = "absolute""#;
    let site = SiteConfig::from_toml_str(&site_toml(gauge, "samples = [[51.5, 4000.0]]"))?;
    assert!(site.validate().is_err());
    Ok(())
}

#[test]
fn test_rejects_inverted_thresholds() -> Result<()> {
    let gauge = r#"offset = 50.608
relative_threshold = 50.0
absolute_threshold = 10.0
frame = "absolute""#;
    let site = SiteConfig::from_toml_str(&site_toml(gauge, "samples = [[51.5, 4000.0]]"))?;
    assert!(site.validate().is_err());
    Ok(())
}

#[test]
fn test_rejects_missing_table_source() -> Result<()> {
    let site = SiteConfig::from_toml_str(&site_toml(VALID_GAUGE, ""))?;
    assert!(matches!(
        site.validate(),
        Err(GaugeError::MissingConfigError { .. })
    ));
    assert!(site.load_table(".").is_err());
    Ok(())
}

#[test]
fn test_rejects_both_table_sources() -> Result<()> {
    let table = "samples = [[51.5, 4000.0]]\ncsv_path = \"table.csv\"";
    let site = SiteConfig::from_toml_str(&site_toml(VALID_GAUGE, table))?;
    assert!(matches!(
        site.load_table("."),
        Err(GaugeError::InvalidConfigValueError { .. })
    ));
    Ok(())
}

#[test]
fn test_rejects_non_monotonic_table() -> Result<()> {
    let table = "samples = [[51.5, 4000.0], [51.5, 11628.0]]";
    let site = SiteConfig::from_toml_str(&site_toml(VALID_GAUGE, table))?;
    assert!(matches!(
        site.load_table("."),
        Err(GaugeError::TableError { .. })
    ));
    Ok(())
}

#[test]
fn test_missing_config_file() {
    assert!(matches!(
        SiteConfig::from_file("does-not-exist.toml"),
        Err(GaugeError::IoError(_))
    ));
}

#[test]
fn test_malformed_toml() {
    assert!(matches!(
        SiteConfig::from_toml_str("not valid toml ["),
        Err(GaugeError::ConfigValidationError { .. })
    ));
}
