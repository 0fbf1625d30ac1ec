//! chatboteval: command-line scaffold and installed-version lookup
//!
//! [`get_version`] is the stable entry point; the remaining modules back the
//! `chatboteval` binary.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod metadata;

pub use api::get_version;
