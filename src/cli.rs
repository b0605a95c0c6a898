//! Command-line interface for urxvt-launch.
//!
//! This module handles CLI argument parsing; every flag is optional and
//! falls back to the config file (which in turn yields to `URXVT_*`
//! environment overrides).

use clap::Parser;
use std::path::PathBuf;

/// urxvt-launch - a font-resolving launcher for the urxvt terminal emulator
#[derive(Parser)]
#[command(name = "urxvt-launch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Font families to request, comma separated, highest priority first
    #[arg(short, long, value_name = "FAMILIES")]
    pub font: Option<String>,

    /// Font size in pixels
    #[arg(short, long, value_name = "PIXELS")]
    pub size: Option<u32>,

    /// Put the configured bitmap font ahead of every scalable font
    #[arg(short = 'b', long = "bitmap")]
    pub prefer_bitmap: bool,

    /// Window icon file name (looked up in the icon directory)
    #[arg(long, value_name = "FILE")]
    pub icon: Option<String>,

    /// Directory searched for the window icon
    #[arg(long, value_name = "DIR")]
    pub icon_dir: Option<PathBuf>,

    /// Disable the perl extension list entirely
    #[arg(long = "no-ext")]
    pub no_extensions: bool,

    /// Extra perl extensions to activate, comma separated
    #[arg(long = "ext", value_name = "LIST")]
    pub extensions: Option<String>,

    /// Command for the terminal to execute instead of the shell
    #[arg(short = 'e', long = "exec", value_name = "COMMAND")]
    pub exec: Option<String>,

    /// Increase log verbosity (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Arguments after `--` are forwarded to the terminal untouched
    #[arg(last = true, value_name = "ARGS")]
    pub passthrough: Vec<String>,
}

/// Runtime options passed from CLI to the launcher
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Requested font families (comma separated), overriding the config
    pub font: Option<String>,
    /// Font size in pixels, overriding the config
    pub size: Option<u32>,
    /// Prepend the bitmap font ahead of every scalable font
    pub prefer_bitmap: bool,
    /// Icon file name, overriding the config
    pub icon: Option<String>,
    /// Icon search directory, overriding the config
    pub icon_dir: Option<PathBuf>,
    /// Disable perl extensions entirely
    pub no_extensions: bool,
    /// Extra perl extensions to activate
    pub extensions: Option<String>,
    /// Command string for the terminal to execute
    pub exec: Option<String>,
    /// Log verbosity from repeated `-v` flags
    pub verbose: u8,
    /// Free-form arguments forwarded to the terminal untouched
    pub passthrough: Vec<String>,
}

impl From<Cli> for RuntimeOptions {
    fn from(cli: Cli) -> Self {
        Self {
            font: cli.font,
            size: cli.size,
            prefer_bitmap: cli.prefer_bitmap,
            icon: cli.icon,
            icon_dir: cli.icon_dir,
            no_extensions: cli.no_extensions,
            extensions: cli.extensions,
            exec: cli.exec,
            verbose: cli.verbose,
            passthrough: cli.passthrough,
        }
    }
}

/// Process CLI arguments into runtime options
pub fn process_cli() -> RuntimeOptions {
    Cli::parse().into()
}
