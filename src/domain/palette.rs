//! Category colours and the step legend.
//!
//! One map from category name to colour, built once. Lookups are a single
//! hash probe regardless of which step a category belongs to.

use std::collections::HashMap;

use super::error::SeqburstError;
use crate::ports::config_port::ConfigPort;

/// Fill for names that have no configured colour.
pub const FALLBACK_COLOR: &str = "#999999";

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    categories: HashMap<String, String>,
    steps: Vec<LegendEntry>,
}

const STEPS: &[(&str, &str)] = &[
    ("Gender", "#E74C3C"),
    ("Industry", "#2E86C1"),
    ("Ask Amount", "#7D3C98"),
    ("Ask Equity", "#229954"),
    ("Ask Valuation", "#F1C40F"),
];

const CATEGORIES: &[(&str, &str)] = &[
    ("Male", "#E74C3C"),
    ("Female", "#C0392B"),
    ("Mixed Team", "#EC7063"),
    ("Automotive", "#2E86C1"),
    ("Business Services", "#21618C"),
    ("Children / Education", "#1F618D"),
    ("Fashion / Beauty", "#2471A3"),
    ("Fitness / Sports / Outdoors", "#2980B9"),
    ("Food and Beverage", "#1A5276"),
    ("Green/CleanTech", "#1B4F72"),
    ("Healthcare", "#5499C7"),
    ("Lifestyle / Home", "#5DADE2"),
    ("Media / Entertainment", "#7FB3D5"),
    ("Pet Products", "#1B4F72"),
    ("Software / Tech", "#85C1E9"),
    ("Travel", "#A9CCE3"),
    ("Uncertain / Other", "#AED6F1"),
    ("$0-$250k", "#A569BD"),
    ("$250k-$500k", "#9B59B6"),
    ("$500k-$750k", "#884EA0"),
    ("$750k-$1M", "#76448A"),
    (">$1M", "#7D3C98"),
    ("0%-25%", "#82E0AA"),
    ("25%-50%", "#2ECC71"),
    ("50%-100%", "#229954"),
    (">100%", "#196F3D"),
    ("<$1M", "#F7DC6F"),
    ("$1M-$10M", "#F1C40F"),
    ("$10M-20M", "#D4AC0D"),
    (">$20M", "#B7950B"),
];

impl Default for Palette {
    fn default() -> Self {
        Self {
            categories: CATEGORIES
                .iter()
                .map(|&(name, color)| (name.to_string(), color.to_string()))
                .collect(),
            steps: STEPS
                .iter()
                .map(|&(label, color)| LegendEntry {
                    label: label.to_string(),
                    color: color.to_string(),
                })
                .collect(),
        }
    }
}

impl Palette {
    /// Built-in colours overlaid with `[palette]` (category colours) and
    /// `[steps]` (legend entries) from the config.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, SeqburstError> {
        let mut palette = Palette::default();
        for (name, value) in config.entries("palette") {
            let color = normalize_color("palette", &name, &value)?;
            palette.set_color(name, color);
        }
        for (label, value) in config.entries("steps") {
            let color = normalize_color("steps", &label, &value)?;
            palette.set_step(label, color);
        }
        Ok(palette)
    }

    pub fn color(&self, name: &str) -> Option<&str> {
        self.categories.get(name).map(String::as_str)
    }

    pub fn color_or_fallback(&self, name: &str) -> &str {
        self.color(name).unwrap_or(FALLBACK_COLOR)
    }

    pub fn set_color(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.categories.insert(name.into(), color.into());
    }

    /// Replace the colour of an existing legend entry or append a new one.
    pub fn set_step(&mut self, label: impl Into<String>, color: impl Into<String>) {
        let label = label.into();
        let color = color.into();
        match self.steps.iter_mut().find(|e| e.label == label) {
            Some(entry) => entry.color = color,
            None => self.steps.push(LegendEntry { label, color }),
        }
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.steps
    }
}

/// Accept `RRGGBB`, `RGB`, with or without a leading `#`, and return the
/// `#`-prefixed uppercase form.
pub fn normalize_color(section: &str, key: &str, value: &str) -> Result<String, SeqburstError> {
    let hex = value.trim().trim_start_matches('#');
    let valid = matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(SeqburstError::config_invalid(
            section,
            key,
            format!("'{value}' is not a hex colour"),
        ));
    }
    Ok(format!("#{}", hex.to_ascii_uppercase()))
}
