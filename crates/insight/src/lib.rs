#![forbid(unsafe_code)]

//! InSight: a study planner for the terminal.
//!
//! Screens live on a navigation stack managed by [`app::App`]. The home
//! screen carries the pull-up schedule panel from `insight-widgets`; the host
//! loop in [`program`] drives it from crossterm input.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod frame;
pub mod logging;
pub mod presenter;
pub mod program;
pub mod screens;
pub mod terminal_session;

pub use cli::run_from_env;
