//! # Inbound Ports (Driving Ports)
//!
//! Query operations exposed by the Ledger Query subsystem. Inputs are
//! already-resolved value objects, so the only failures left are
//! `TxNotFound` and store failures.

use async_trait::async_trait;

use crate::domain::{
    HistoryResponse, PendingResponse, PublicKey, SourcesResponse, TransactionView, TxHash,
};
use crate::error::QueryError;

/// Primary API for the Ledger Query subsystem.
#[async_trait]
pub trait LedgerQueryApi: Send + Sync {
    /// Unspent sources of an identity.
    async fn sources(&self, pubkey: &PublicKey) -> Result<SourcesResponse, QueryError>;

    /// Canonical view of one transaction.
    ///
    /// ## Returns
    ///
    /// - `Ok(TransactionView)`: the normalized transaction
    /// - `Err(TxNotFound)`: the store has no record for `hash`
    async fn transaction(&self, hash: &TxHash) -> Result<TransactionView, QueryError>;

    /// Full four-category history.
    async fn history(&self, pubkey: &PublicKey) -> Result<HistoryResponse, QueryError>;

    /// Confirmed history with `from <= block_number <= to`; pending forced empty.
    async fn history_between_blocks(
        &self,
        pubkey: &PublicKey,
        from: u64,
        to: u64,
    ) -> Result<HistoryResponse, QueryError>;

    /// Confirmed history with `from <= time <= to`; pending forced empty.
    async fn history_between_times(
        &self,
        pubkey: &PublicKey,
        from: u64,
        to: u64,
    ) -> Result<HistoryResponse, QueryError>;

    /// Pending history only; confirmed forced empty.
    async fn pending_for(&self, pubkey: &PublicKey) -> Result<HistoryResponse, QueryError>;

    /// All pending transactions, network-wide.
    async fn pending(&self) -> Result<PendingResponse, QueryError>;
}
