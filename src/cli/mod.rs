//! Command-line layer
//!
//! Reaches version data only through [`crate::get_version`].

pub mod args;
pub mod dispatch;

pub use args::{Cli, Command};
pub use dispatch::{Context, Outcome, dispatch};
