//! Service Layer
//!
//! Orchestrates one store call per request followed by normalization,
//! filtering and envelope assembly.

pub mod ledger_query_service;

pub use ledger_query_service::LedgerQueryService;
