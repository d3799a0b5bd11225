//! This crate contains the library behind mazewalk, a terminal maze editor and solver.
//!
//! The [`solver`] module holds the search strategies and can be used on its own; the remaining
//! modules drive the terminal interface around it.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod animation;
mod app;
mod config;
mod editor;
mod events;
pub mod logging;
mod results;
pub mod solver;
mod types;
mod ui;

pub use app::App;
pub use config::Config;
