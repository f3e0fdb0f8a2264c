//! # CLI Layer
//!
//! This module is **one possible front end** for the cafe library.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing
//! - Formats amounts, tables and colors for human consumption
//! - Installs the `tracing` subscriber
//!
//! ## Structure
//!
//! - [`setup`]: clap definitions
//! - [`commands`]: `run()`, context setup and per-subcommand handlers
//! - [`session`]: the interactive six-action order desk
//! - [`render`]: text output for menus, orders and messages

pub mod commands;
pub mod render;
pub mod session;
pub mod setup;

pub use commands::run;
