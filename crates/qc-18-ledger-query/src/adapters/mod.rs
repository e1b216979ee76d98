//! # Adapters Layer
//!
//! - `ApiGatewayHandler` / `handle_api_query`: method dispatch for qc-16
//! - `params`: request parameter resolution
//! - `InMemoryLedgerStore`: `LedgerStore` for development and tests

pub mod api_handler;
pub mod memory_store;
pub mod params;

pub use api_handler::{handle_api_query, ApiGatewayHandler, SUBSYSTEM_NAME};
pub use memory_store::InMemoryLedgerStore;
pub use params::{resolve_bound, resolve_hash, resolve_pubkey, resolve_range};
