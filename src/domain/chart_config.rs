//! Chart geometry and input settings, read from an INI config.

use super::error::SeqburstError;
use super::hierarchy::DEFAULT_DELIMITER;
use crate::ports::config_port::ConfigPort;

/// Default minimum angular extent, in radians, for an arc to be drawn.
pub const DEFAULT_MIN_ANGLE: f64 = 0.0001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreadcrumbDims {
    pub width: f64,
    pub height: f64,
    pub spacing: f64,
    /// Depth of the arrow tip and tail notch.
    pub tip: f64,
}

impl Default for BreadcrumbDims {
    fn default() -> Self {
        Self {
            width: 175.0,
            height: 30.0,
            spacing: 3.0,
            tip: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendDims {
    pub width: f64,
    pub height: f64,
    pub spacing: f64,
    pub radius: f64,
}

impl Default for LegendDims {
    fn default() -> Self {
        Self {
            width: 85.0,
            height: 30.0,
            spacing: 3.0,
            radius: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub min_angle: f64,
    /// Order siblings by descending size; otherwise keep encounter order.
    pub sort_by_value: bool,
    pub delimiter: char,
    pub breadcrumb: BreadcrumbDims,
    pub legend: LegendDims,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
            min_angle: DEFAULT_MIN_ANGLE,
            sort_by_value: true,
            delimiter: DEFAULT_DELIMITER,
            breadcrumb: BreadcrumbDims::default(),
            legend: LegendDims::default(),
        }
    }
}

impl ChartConfig {
    pub fn radius(&self) -> f64 {
        self.width.min(self.height) / 2.0
    }

    /// Read every setting, falling back to defaults, then validate.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, SeqburstError> {
        validate_chart_config(config)?;
        let d = ChartConfig::default();

        let delimiter = config
            .get_string("input", "delimiter")
            .and_then(|s| s.trim().chars().next())
            .unwrap_or(d.delimiter);

        Ok(ChartConfig {
            width: config.get_double("chart", "width", d.width),
            height: config.get_double("chart", "height", d.height),
            min_angle: config.get_double("chart", "min_angle", d.min_angle),
            sort_by_value: config.get_bool("chart", "sort_by_value", d.sort_by_value),
            delimiter,
            breadcrumb: BreadcrumbDims {
                width: config.get_double("breadcrumb", "width", d.breadcrumb.width),
                height: config.get_double("breadcrumb", "height", d.breadcrumb.height),
                spacing: config.get_double("breadcrumb", "spacing", d.breadcrumb.spacing),
                tip: config.get_double("breadcrumb", "tip", d.breadcrumb.tip),
            },
            legend: LegendDims {
                width: config.get_double("legend", "width", d.legend.width),
                height: config.get_double("legend", "height", d.legend.height),
                spacing: config.get_double("legend", "spacing", d.legend.spacing),
                radius: config.get_double("legend", "radius", d.legend.radius),
            },
        })
    }
}

pub fn validate_chart_config(config: &dyn ConfigPort) -> Result<(), SeqburstError> {
    validate_delimiter(config)?;
    for (section, key) in [
        ("chart", "width"),
        ("chart", "height"),
        ("breadcrumb", "width"),
        ("breadcrumb", "height"),
        ("legend", "width"),
        ("legend", "height"),
    ] {
        validate_positive(config, section, key)?;
    }
    for (section, key) in [
        ("chart", "min_angle"),
        ("breadcrumb", "spacing"),
        ("breadcrumb", "tip"),
        ("legend", "spacing"),
        ("legend", "radius"),
    ] {
        validate_non_negative(config, section, key)?;
    }
    Ok(())
}

fn validate_delimiter(config: &dyn ConfigPort) -> Result<(), SeqburstError> {
    if let Some(value) = config.get_string("input", "delimiter") {
        if value.trim().chars().count() != 1 {
            return Err(SeqburstError::config_invalid(
                "input",
                "delimiter",
                "delimiter must be a single character",
            ));
        }
    }
    Ok(())
}

fn read_number(config: &dyn ConfigPort, section: &str, key: &str) -> Result<Option<f64>, SeqburstError> {
    match config.get_string(section, key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<f64>().map(Some).map_err(|_| {
            SeqburstError::config_invalid(section, key, format!("'{raw}' is not a number"))
        }),
    }
}

fn validate_positive(config: &dyn ConfigPort, section: &str, key: &str) -> Result<(), SeqburstError> {
    match read_number(config, section, key)? {
        Some(v) if v <= 0.0 || !v.is_finite() => Err(SeqburstError::config_invalid(
            section,
            key,
            format!("{key} must be positive"),
        )),
        _ => Ok(()),
    }
}

fn validate_non_negative(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<(), SeqburstError> {
    match read_number(config, section, key)? {
        Some(v) if v < 0.0 || !v.is_finite() => Err(SeqburstError::config_invalid(
            section,
            key,
            format!("{key} must be non-negative"),
        )),
        _ => Ok(()),
    }
}
