//! Command line frontend for the metric engine.
//!
//! Everything user-facing lives here: argument parsing, logger setup, and
//! the text reports printed by each subcommand.

#[macro_use] extern crate log;
#[macro_use] extern crate failure;
#[macro_use] extern crate itertools;
#[cfg(test)] #[macro_use] extern crate cellmetric_assert_close;

pub type FailResult<T> = Result<T, failure::Error>;

mod ui;
mod cmd;
pub mod entry_points;

pub use crate::cmd::{system_from_cli_values, tensor_report, geometry_report};
