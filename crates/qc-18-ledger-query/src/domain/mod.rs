//! # Domain Layer
//!
//! Pure query logic for the Ledger Query subsystem:
//!
//! - `entities`: store records, canonical views, response envelopes
//! - `normalizer`: record → canonical transaction view
//! - `history_filter`: per-query-type category policy
//! - `assembler`: response envelopes
//! - `value_objects`: validated public keys, hashes, ranges
//! - `config`: currency configuration
//!
//! This module contains NO I/O dependencies. The ledger store is reached
//! only through the `ports` module.

pub mod assembler;
pub mod config;
pub mod entities;
pub mod history_filter;
pub mod normalizer;
pub mod value_objects;

pub use assembler::ResponseAssembler;
pub use config::{QueryConfig, DEFAULT_CURRENCY};
pub use entities::*;
pub use history_filter::HistoryFilter;
pub use normalizer::{normalize_all, normalize_history, normalize_transaction};
pub use value_objects::*;
