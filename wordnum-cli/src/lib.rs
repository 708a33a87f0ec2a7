//! Wordnum CLI library
//!
//! This library provides the command-line interface for converting
//! spelled-out English numbers in text files into digits.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
