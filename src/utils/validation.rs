use crate::utils::error::{GaugeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GaugeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GaugeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite positive number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_ordered_band(field_name: &str, low: f64, high: f64) -> Result<()> {
    if !low.is_finite() || !high.is_finite() {
        return Err(GaugeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..{}", low, high),
            reason: "Band limits must be finite".to_string(),
        });
    }
    if low > high {
        return Err(GaugeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..{}", low, high),
            reason: "Lower band must not exceed upper band".to_string(),
        });
    }
    Ok(())
}
