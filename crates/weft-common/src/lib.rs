//! Common infrastructure for the weft variant resolver.
//!
//! This crate provides:
//! - **Warning System** - deduplicated, colored advisory notices
//! - **Configuration** - preset options and theme values loaded from JSON

pub mod config;
pub mod warning;

pub use config::{Config, ConfigError, PresetOptions, Theme, TransformRules};
