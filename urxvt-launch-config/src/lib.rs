//! Configuration system for the urxvt-launch terminal launcher.
//!
//! This crate provides:
//! - The [`Config`] struct with the launcher's default font, icon, and
//!   extension settings
//! - YAML config file persistence (load-or-create in the platform config
//!   directory)
//! - `URXVT_*` environment-variable overrides applied on top of the file

pub mod config;
pub mod error;

pub use config::Config;
pub use error::ConfigError;
