//! # Cafe Architecture
//!
//! Cafe is an **order desk library** for a small cafe: a fixed menu, orders
//! placed against it, and a running total of the day's takings. The `cafe`
//! binary is one client of it, not the library itself.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the interactive session           │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - CafeApi: composes menu and ledger, owns daily revenue    │
//! │  - Returns Option / outcome values, never strings           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - MenuCatalog: ordered menu, lookup by id                  │
//! │  - OrderLedger: order ids, storage, lifecycle               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns plain Rust
//! types and never writes to a terminal. Diagnostics go through `tracing`;
//! the binary decides where they end up (see [`logging`]).
//!
//! ## Order Lifecycle
//!
//! Orders start `Pending`, collect items, and move to `Completed` exactly
//! once. Completion books the order total into the daily revenue; a second
//! completion is reported back as `AlreadyCompleted` and books nothing.
//! Completed orders refuse further items.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`store`]: Menu catalog and order ledger
//! - [`model`]: Core data types (`MenuItem`, `Order`, `OrderView`)
//! - [`outcome`]: Typed results for not-found and refused operations
//! - [`config`]: Configuration management
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the interactive session and rendering (binary only)

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod outcome;
pub mod store;
