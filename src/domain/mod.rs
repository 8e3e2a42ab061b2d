//! Core domain types and logic.

pub mod aggregate;
pub mod chart_config;
pub mod error;
pub mod format;
pub mod hierarchy;
pub mod palette;
pub mod partition;
pub mod record;
pub mod selection;
