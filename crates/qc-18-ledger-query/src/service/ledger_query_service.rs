//! Ledger Query Service
//!
//! Implements `LedgerQueryApi` on top of an injected `LedgerStore`.
//! Every operation is stateless: one awaited store call, then pure,
//! synchronous normalization, filtering and assembly.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::domain::{
    normalize_all, normalize_history, normalize_transaction, HistoryFilter, HistoryResponse,
    PendingResponse, PublicKey, QueryConfig, ResponseAssembler, SourceView, SourcesResponse,
    TransactionView, TxHash,
};
use crate::error::QueryError;
use crate::ports::{LedgerQueryApi, LedgerStore};

/// Ledger Query Service implementation
pub struct LedgerQueryService<S: LedgerStore> {
    /// Ledger store (driven port)
    store: Arc<S>,
    /// Envelope builder bound to the configured currency
    assembler: ResponseAssembler,
}

impl<S: LedgerStore> LedgerQueryService<S> {
    /// Create a service for the currency in `config`
    pub fn new(store: Arc<S>, config: &QueryConfig) -> Self {
        Self {
            store,
            assembler: ResponseAssembler::new(config.currency.clone()),
        }
    }

    pub fn currency(&self) -> &str {
        self.assembler.currency()
    }

    /// Fetch, normalize and filter the history of `pubkey`.
    async fn filtered_history(
        &self,
        pubkey: &PublicKey,
        filter: HistoryFilter,
    ) -> Result<HistoryResponse, QueryError> {
        let stored = self
            .store
            .get_transactions_history(pubkey.as_str())
            .await?;
        let normalized = normalize_history(stored);
        let history = filter.apply(&normalized);

        debug!(
            mode = filter.name(),
            fetched = normalized.len(),
            returned = history.len(),
            "[qc-18] History filtered"
        );

        Ok(self.assembler.history(pubkey, history))
    }
}

#[async_trait]
impl<S: LedgerStore + 'static> LedgerQueryApi for LedgerQueryService<S> {
    #[instrument(skip_all, fields(pubkey = %pubkey))]
    async fn sources(&self, pubkey: &PublicKey) -> Result<SourcesResponse, QueryError> {
        let records = self
            .store
            .get_available_sources_by_pubkey(pubkey.as_str())
            .await?;
        let sources: Vec<SourceView> = records.into_iter().map(SourceView::from).collect();

        debug!(count = sources.len(), "[qc-18] Sources listed");
        Ok(self.assembler.sources(pubkey, sources))
    }

    #[instrument(skip_all, fields(hash = %hash))]
    async fn transaction(&self, hash: &TxHash) -> Result<TransactionView, QueryError> {
        match self.store.get_tx_by_hash(hash.as_str()).await? {
            Some(record) => Ok(normalize_transaction(record)),
            None => {
                debug!("[qc-18] Transaction not found");
                Err(QueryError::TxNotFound {
                    hash: hash.to_string(),
                })
            }
        }
    }

    #[instrument(skip_all, fields(pubkey = %pubkey))]
    async fn history(&self, pubkey: &PublicKey) -> Result<HistoryResponse, QueryError> {
        self.filtered_history(pubkey, HistoryFilter::Full).await
    }

    #[instrument(skip_all, fields(pubkey = %pubkey, from = from, to = to))]
    async fn history_between_blocks(
        &self,
        pubkey: &PublicKey,
        from: u64,
        to: u64,
    ) -> Result<HistoryResponse, QueryError> {
        self.filtered_history(pubkey, HistoryFilter::blocks(from, to))
            .await
    }

    #[instrument(skip_all, fields(pubkey = %pubkey, from = from, to = to))]
    async fn history_between_times(
        &self,
        pubkey: &PublicKey,
        from: u64,
        to: u64,
    ) -> Result<HistoryResponse, QueryError> {
        self.filtered_history(pubkey, HistoryFilter::times(from, to))
            .await
    }

    #[instrument(skip_all, fields(pubkey = %pubkey))]
    async fn pending_for(&self, pubkey: &PublicKey) -> Result<HistoryResponse, QueryError> {
        self.filtered_history(pubkey, HistoryFilter::PendingOnly)
            .await
    }

    #[instrument(skip_all)]
    async fn pending(&self) -> Result<PendingResponse, QueryError> {
        let records = self.store.get_transactions_pending().await?;
        let pending = normalize_all(records);

        debug!(count = pending.len(), "[qc-18] Pending transactions listed");
        Ok(self.assembler.pending(pending))
    }
}
