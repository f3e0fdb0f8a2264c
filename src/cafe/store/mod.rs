//! # Storage Layer
//!
//! Two in-memory stores back the cafe:
//!
//! - [`catalog::MenuCatalog`]: the ordered list of purchasable items.
//! - [`ledger::OrderLedger`]: order identity, storage and lifecycle.
//!
//! Nothing here persists. Each store is a plain value owned by
//! [`crate::api::CafeApi`], so tests can build as many independent cafes as
//! they like.
//!
//! ## Lookups
//!
//! Lookups by id return `Option`. Mutations that can be refused return an
//! [`crate::outcome`] value. Neither store writes to stdout or stderr; they
//! only emit `tracing` events.

pub mod catalog;
pub mod ledger;

pub use catalog::MenuCatalog;
pub use ledger::OrderLedger;
