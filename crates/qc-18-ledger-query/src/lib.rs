//! # QC-18 Ledger Query
//!
//! Read-only query layer in front of the ledger store. Answers, for an
//! identity (public key) or network-wide:
//!
//! - which unspent sources an identity owns
//! - what a transaction is, by hash
//! - the categorized history of an identity (sent / received confirmed,
//!   sending / receiving pending), optionally restricted to a block or
//!   time range
//! - which transactions are pending
//!
//! ## Request Flow
//!
//! ```text
//! params ──resolve──→ LedgerStore (one call) ──→ normalize ──→ HistoryFilter ──→ envelope
//! ```
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): normalizer, history filter, assembler; no I/O
//! - **Ports Layer** (`ports/`): `LedgerQueryApi` (inbound), `LedgerStore` (outbound)
//! - **Service Layer** (`service/`): `LedgerQueryService`
//! - **Adapters Layer** (`adapters/`): parameter resolution, API gateway dispatch,
//!   in-memory store
//!
//! ## Invariants
//!
//! - `block_number` absent ⇔ pending; nothing else decides confirmation state
//! - Transaction views never carry `currency` or storage artifacts
//! - Range queries return no pending entries; pending queries return no
//!   confirmed entries
//! - The store is never written to
//!
//! ## Usage Example
//!
//! ```ignore
//! use qc_18_ledger_query::{
//!     handle_api_query, ApiGatewayHandler, InMemoryLedgerStore, LedgerQueryService, QueryConfig,
//! };
//! use std::sync::Arc;
//!
//! let config = QueryConfig::from_env()?;
//! let store = Arc::new(InMemoryLedgerStore::new());
//! let handler = ApiGatewayHandler::new(LedgerQueryService::new(store, &config));
//!
//! let params = serde_json::json!({ "pubkey": pubkey, "from": 5, "to": 15 });
//! let response = handle_api_query(&handler, "get_history_blocks", &params).await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod telemetry;

// Re-exports for convenience
pub use domain::{
    History, HistoryCategory, HistoryFilter, HistoryResponse, InclusiveRange, PendingResponse,
    PublicKey, QueryConfig, ResponseAssembler, SourceKind, SourceRecord, SourceView,
    SourcesResponse, StoredEntry, TransactionRecord, TransactionView, TxHash,
};
pub use error::{ApiQueryError, ConfigError, QueryError, StoreError};
pub use ports::{LedgerQueryApi, LedgerStore};
pub use service::LedgerQueryService;

pub use adapters::{handle_api_query, ApiGatewayHandler, InMemoryLedgerStore};
pub use telemetry::init_tracing;
