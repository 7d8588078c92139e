//! promptline library
//!
//! Resolves command-line flags, a YAML config file and built-in defaults into
//! one set of options, with explicitly typed flags always taking precedence.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
