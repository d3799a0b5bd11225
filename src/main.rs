//! This crate contains the source code for the binary for the mazewalk maze editor.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazewalk::{logging, App, Config};

fn main() -> Result<()> {
    install()?;

    let config = Config::parse();
    let _guard = logging::init(&config.log_dir)?;

    let mut terminal = ratatui::init();
    let outcome = App::new(&config).run(&mut terminal);
    ratatui::restore();

    outcome
}
