//! lumos-cli library root.
//!
//! Re-exports the command, settings, and session modules so integration
//! tests and examples can drive them without going through argument
//! parsing.

pub mod cli;
pub mod commands;
pub mod config;
pub mod delivery;
pub mod session;
