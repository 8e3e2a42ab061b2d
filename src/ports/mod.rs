//! Port traits for record sources, configuration, and display sinks.

pub mod config_port;
pub mod display_port;
pub mod record_port;
