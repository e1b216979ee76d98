//! # Response Assembler
//!
//! Wraps normalized payloads with the configured currency and, for
//! identity-scoped queries, the queried public key.

use super::entities::{
    History, HistoryResponse, PendingResponse, SourceView, SourcesResponse, TransactionView,
};
use super::value_objects::PublicKey;

/// Builds response envelopes for one currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseAssembler {
    currency: String,
}

impl ResponseAssembler {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn sources(&self, pubkey: &PublicKey, sources: Vec<SourceView>) -> SourcesResponse {
        SourcesResponse {
            currency: self.currency.clone(),
            pubkey: pubkey.to_string(),
            sources,
        }
    }

    pub fn history(
        &self,
        pubkey: &PublicKey,
        history: History<TransactionView>,
    ) -> HistoryResponse {
        HistoryResponse {
            currency: self.currency.clone(),
            pubkey: pubkey.to_string(),
            history,
        }
    }

    pub fn pending(&self, pending: Vec<TransactionView>) -> PendingResponse {
        PendingResponse {
            currency: self.currency.clone(),
            pending,
        }
    }
}
