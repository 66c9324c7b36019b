//! Tabula front-end driver.
//!
//! The `tabula` binary is a thin shell over this library: argument parsing
//! lives in [`cli`], each subcommand in [`commands`], and both are tested
//! here without spawning processes.

pub mod cli;
pub mod commands;
mod error;
mod tracing_setup;

pub use error::DriverError;
pub use tracing_setup::init_tracing;
