#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod app;
mod events;
mod keys;
mod screen;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cortland::{Cortland, Firmware};
use log::info;

/// Terminal front-end for the Cortland 8-bit machine emulator.
///
/// Runs the given system ROM (BASIC interpreter plus monitor) and presents
/// the machine's 40x24 text screen in the terminal. Ctrl-R is the
/// machine's reset key, Ctrl-Q quits; everything else is typed into the
/// machine.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the 12 KiB system ROM image.
    rom: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let firmware = Firmware::from_file(&args.rom)
        .with_context(|| format!("could not load ROM image {}", args.rom.display()))?;
    info!("loaded ROM image {}", args.rom.display());

    let machine = Cortland::new(&firmware);
    app::run(machine)
}
