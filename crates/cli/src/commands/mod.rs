//! CLI subcommand implementations.
//!
//! Each command builds a controller over the file-backed store, drives it,
//! and returns the text the binary should print.

pub mod market;
pub mod otp;
pub mod theme;
