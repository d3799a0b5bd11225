//! Command-line configuration.

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use color_eyre::eyre::{bail, ensure, Result, WrapErr as _};

use crate::solver::Strategy;

/// Default number of grid rows.
pub(crate) const DEFAULT_ROWS: u16 = 15;

/// Default number of grid columns.
pub(crate) const DEFAULT_COLS: u16 = 30;

/// Largest accepted grid side. Keeps the recursive strategies well within the stack.
pub(crate) const MAX_SIDE: i64 = 100;

/// Default delay between two visited cells during timed playback.
pub(crate) const DEFAULT_VISIT_DELAY_MS: u64 = 100;

/// Default delay between two path cells during timed playback.
pub(crate) const DEFAULT_PATH_DELAY_MS: u64 = 50;

/// Runtime configuration of the maze editor.
///
/// Every field maps to a command-line flag. The [`Default`] implementation mirrors the defaults
/// declared on the flags so the application can be built without parsing arguments.
#[derive(Clone, Debug, PartialEq, Eq, Parser)]
#[command(version, about)]
pub struct Config {
    /// Number of rows in the maze grid.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_ROWS,
        value_parser = clap::value_parser!(u16).range(1..=MAX_SIDE)
    )]
    pub rows: u16,
    /// Number of columns in the maze grid.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_COLS,
        value_parser = clap::value_parser!(u16).range(1..=MAX_SIDE)
    )]
    pub cols: u16,
    /// Search strategy selected at startup.
    #[arg(short, long, value_enum, default_value_t = Strategy::BreadthFirst)]
    pub strategy: Strategy,
    /// Milliseconds between two explored cells while animating a search.
    #[arg(long, default_value_t = DEFAULT_VISIT_DELAY_MS)]
    pub visit_delay_ms: u64,
    /// Milliseconds between two path cells while animating a search.
    #[arg(long, default_value_t = DEFAULT_PATH_DELAY_MS)]
    pub path_delay_ms: u64,
    /// Directory the log file is written to.
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            strategy: Strategy::default(),
            visit_delay_ms: DEFAULT_VISIT_DELAY_MS,
            path_delay_ms: DEFAULT_PATH_DELAY_MS,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl Config {
    /// Delay between two explored cells during timed playback.
    #[must_use]
    pub const fn visit_delay(&self) -> Duration {
        Duration::from_millis(self.visit_delay_ms)
    }

    /// Delay between two path cells during timed playback.
    #[must_use]
    pub const fn path_delay(&self) -> Duration {
        Duration::from_millis(self.path_delay_ms)
    }
}

/// Parses a grid size typed as two numbers, rows first, such as `15x30` or `15 30`.
///
/// Both sides must lie in the same range accepted by the `--rows` and `--cols` flags.
///
/// # Errors
///
/// This function may return errors if:
/// - The input does not hold exactly two sizes
/// - A size is not a number
/// - A size is zero or larger than the maximum side
pub(crate) fn parse_dimensions(input: &str) -> Result<(u16, u16)> {
    let mut parts = input
        .split(|sep: char| matches!(sep, 'x' | 'X' | ',') || sep.is_whitespace())
        .filter(|part| !part.is_empty());

    let (Some(rows), Some(cols), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected rows and columns, as in {DEFAULT_ROWS}x{DEFAULT_COLS}");
    };

    Ok((parse_side("rows", rows)?, parse_side("columns", cols)?))
}

/// Parses one side of a grid size.
fn parse_side(name: &str, value: &str) -> Result<u16> {
    let side: u16 = value
        .parse()
        .wrap_err_with(|| format!("{name} must be a whole number"))?;
    ensure!(
        (1..=MAX_SIDE).contains(&i64::from(side)),
        "{name} must be between 1 and {MAX_SIDE}"
    );

    Ok(side)
}
