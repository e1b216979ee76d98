//! # Outbound Ports (Driven Ports)
//!
//! The ledger store this layer reads from. All methods are read-only;
//! consistency of what they return is the store's concern.

use async_trait::async_trait;

use crate::domain::{History, SourceRecord, TransactionRecord};
use crate::error::StoreError;

/// Read-only access to the ledger store.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Unspent sources owned by `pubkey`, in store order.
    async fn get_available_sources_by_pubkey(
        &self,
        pubkey: &str,
    ) -> Result<Vec<SourceRecord>, StoreError>;

    /// Transaction by hash; `Ok(None)` when the store has no such record.
    async fn get_tx_by_hash(&self, hash: &str) -> Result<Option<TransactionRecord>, StoreError>;

    /// Confirmed and pending transactions involving `pubkey`, by category.
    async fn get_transactions_history(
        &self,
        pubkey: &str,
    ) -> Result<History<TransactionRecord>, StoreError>;

    /// Every pending transaction, network-wide.
    async fn get_transactions_pending(&self) -> Result<Vec<TransactionRecord>, StoreError>;
}
