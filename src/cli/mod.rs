//! Command-line support for the `gwalk` binary.

pub mod commands;
