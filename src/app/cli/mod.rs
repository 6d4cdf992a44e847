//! Command-line interface: argument and configuration handling

pub mod args;
pub mod config;

pub use args::{Args, Command};
pub use config::Config;
