//! Concrete adapter implementations for ports.

pub mod console_display;
pub mod csv_adapter;
pub mod file_config_adapter;
pub mod svg_report;
