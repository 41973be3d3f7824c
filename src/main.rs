use std::{env, process};

use anyhow::Context;
use log::{info, LevelFilter};
use scalesheet::Config;

/// Writes `scales_flat.svg` and `scales_sharp.svg`, then converts them to
/// PDF with Inkscape and merges them with pdftk when those are installed.
///
/// Logging is controlled with RUST_LOG; see docs for the env_logger crate.
/// If RUST_LOG is not set, the log level defaults to Info.
/// Set RUST_LOG=scalesheet::renderer=debug to see diagram sizes.
fn run() -> anyhow::Result<()> {
    let mut log_builder = env_logger::builder();
    if env::var("RUST_LOG").is_err() {
        log_builder.filter_level(LevelFilter::Info);
    }
    log_builder.init();

    let config = Config::from_env().context("reading configuration")?;
    info!(
        "locale {:?}, writing to {}",
        config.locale(),
        config.output_dir.display()
    );
    let written = scalesheet::run(&config)?;
    info!("{} files written", written.len());
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        process::exit(2);
    }
}
