//! Clinical work calculator CLI library.
//!
//! This crate provides the CLI interface for the clinical work calculator.

mod cli;
pub mod commands;
mod config;
pub mod form;

pub use cli::{CalcArgs, Cli, Commands};
pub use config::Config;
