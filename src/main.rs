use anyhow::Result;
use urxvt_launch::{cli, debug, launcher};

fn main() -> Result<()> {
    // Parse CLI first so `--help`/`--version` exit before logging init.
    let options = cli::process_cli();
    debug::init(options.verbose);

    log::debug!("Starting urxvt-launch");
    let result = launcher::run(options);
    if let Err(ref e) = result {
        eprintln!("urxvt-launch: error: {e:#}");
    }
    result
}
