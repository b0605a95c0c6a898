//! Terminal argument assembly and the client/daemon launch policy.
//!
//! The launcher always goes through the client binary (`urxvtc`). When the
//! client reports that no daemon is listening (exit code 2), the daemon is
//! started once and the client invocation retried exactly once; any failure
//! of the retry is surfaced unmodified.

use anyhow::{Context, Result, bail};
use std::process::{Command, ExitStatus};
use urxvt_launch_config::Config;
use urxvt_launch_fonts::{FontRequest, ResolvedFonts};

use crate::cli::RuntimeOptions;

/// The terminal client binary.
pub const CLIENT_BIN: &str = "urxvtc";

/// The terminal daemon binary.
pub const DAEMON_BIN: &str = "urxvtd";

/// Exit code urxvtc reports when the daemon is not running. Not an error,
/// just the defined trigger for the start-daemon-and-retry transition.
const NO_DAEMON_EXIT: i32 = 2;

/// Resolve fonts, assemble the argument list, and launch the terminal.
pub fn run(options: RuntimeOptions) -> Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    let catalog =
        urxvt_launch_fonts::catalog().context("failed to resolve the system font catalog")?;

    let families = options.font.as_deref().unwrap_or(&config.font_family);
    let size = options.size.unwrap_or(config.size);
    let request = FontRequest::new(families, size, options.prefer_bitmap, &config);
    let fonts = request.resolve(catalog);
    if fonts.regular.is_empty() {
        log::warn!("No regular font directives resolved; launching with an empty font list");
    }

    let args = build_args(&config, &options, &fonts);
    launch(&args)
}

/// Assemble the terminal's argument list.
///
/// Layout: font directives first, then icon and extensions, then the
/// pass-through arguments, with the exec command (`-e`) last — urxvt treats
/// everything after `-e` as the command line to run.
pub fn build_args(config: &Config, options: &RuntimeOptions, fonts: &ResolvedFonts) -> Vec<String> {
    let mut args = vec!["-fn".to_string(), fonts.regular.clone()];
    if !fonts.bold.is_empty() {
        args.push("-fb".to_string());
        args.push(fonts.bold.clone());
    }

    let icon_dir = options.icon_dir.as_ref().unwrap_or(&config.icon_dir);
    let icon = options.icon.as_deref().unwrap_or(&config.icon);
    let icon_path = icon_dir.join(icon);
    if icon_path.is_file() {
        args.push("-icon".to_string());
        args.push(icon_path.display().to_string());
    } else {
        log::debug!("Icon {:?} not found, launching without one", icon_path);
    }

    if options.no_extensions {
        args.push("-pe".to_string());
        args.push(String::new());
    } else {
        let mut extensions = config.extensions.clone();
        if let Some(extra) = &options.extensions {
            extensions.extend(
                extra
                    .split(',')
                    .map(str::trim)
                    .filter(|e| !e.is_empty())
                    .map(String::from),
            );
        }
        if !extensions.is_empty() {
            args.push("-pe".to_string());
            args.push(extensions.join(","));
        }
    }

    args.extend(options.passthrough.iter().cloned());

    if let Some(exec) = &options.exec {
        match shell_words::split(exec) {
            Ok(words) if !words.is_empty() => {
                args.push("-e".to_string());
                args.extend(words);
            }
            Ok(_) => {}
            Err(e) => log::warn!("Ignoring unparseable exec command {exec:?}: {e}"),
        }
    }

    args
}

/// Launch the client, starting the daemon and retrying once if needed.
fn launch(args: &[String]) -> Result<()> {
    log::debug!("Launching {CLIENT_BIN} with args: {args:?}");
    let status = run_client(args)?;
    if status.code() == Some(NO_DAEMON_EXIT) {
        log::info!("{CLIENT_BIN} reports no running daemon, starting {DAEMON_BIN}");
        start_daemon()?;
        let retry = run_client(args)?;
        if !retry.success() {
            bail!("{CLIENT_BIN} failed after daemon start: {retry}");
        }
        return Ok(());
    }
    if !status.success() {
        bail!("{CLIENT_BIN} exited with {status}");
    }
    Ok(())
}

fn run_client(args: &[String]) -> Result<ExitStatus> {
    Command::new(CLIENT_BIN)
        .args(args)
        .status()
        .with_context(|| format!("failed to run {CLIENT_BIN}"))
}

/// Start the daemon in the background (`-q` quiet, `-o` open the display on
/// demand, `-f` fork once the socket is ready, so the retried client
/// connects immediately).
fn start_daemon() -> Result<()> {
    let status = Command::new(DAEMON_BIN)
        .args(["-q", "-o", "-f"])
        .status()
        .with_context(|| format!("failed to run {DAEMON_BIN}"))?;
    if !status.success() {
        bail!("{DAEMON_BIN} exited with {status}");
    }
    Ok(())
}
