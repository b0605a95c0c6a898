//! urxvt-launch — a font-resolving launcher for the urxvt terminal emulator.
//!
//! The heavy lifting lives in the workspace crates:
//! - `urxvt-launch-fonts`: system font catalog resolution and XFT directive
//!   assembly
//! - `urxvt-launch-config`: defaults, YAML config persistence, `URXVT_*`
//!   environment overrides
//!
//! This crate is the thin orchestration layer: CLI parsing, the logging
//! bridge, terminal argument assembly, and the client/daemon launch policy.

pub mod cli;
pub mod debug;
pub mod launcher;
