//! # In-Memory Ledger Store
//!
//! `LedgerStore` backed by plain vectors, for development nodes and tests.
//! Records are kept in insertion order and every read returns clones.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{History, HistoryCategory, SourceRecord, TransactionRecord};
use crate::error::StoreError;
use crate::ports::LedgerStore;

/// In-memory ledger store
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    transactions: RwLock<Vec<TransactionRecord>>,
    sources: RwLock<Vec<SourceRecord>>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a transaction, replacing any record with the same hash.
    pub fn insert_transaction(&self, record: TransactionRecord) {
        let mut txs = self.transactions.write();
        match txs.iter_mut().find(|tx| tx.hash == record.hash) {
            Some(existing) => *existing = record,
            None => txs.push(record),
        }
    }

    pub fn add_source(&self, source: SourceRecord) {
        self.sources.write().push(source);
    }

    /// Mark a source as spent. Returns `false` if no such source exists.
    pub fn consume_source(&self, identifier: &str, noffset: u64) -> bool {
        let mut sources = self.sources.write();
        match sources
            .iter_mut()
            .find(|s| s.identifier == identifier && s.noffset == noffset)
        {
            Some(source) => {
                source.consumed = true;
                true
            }
            None => false,
        }
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.read().len()
    }
}

fn sig_condition(pubkey: &str) -> String {
    format!("SIG({})", pubkey)
}

/// Category of `tx` from the point of view of `pubkey`, if it is involved.
fn categorize(tx: &TransactionRecord, pubkey: &str) -> Option<HistoryCategory> {
    let pending = tx.is_pending();
    if tx.issuers.iter().any(|issuer| issuer == pubkey) {
        return Some(if pending {
            HistoryCategory::Sending
        } else {
            HistoryCategory::Sent
        });
    }

    let condition = sig_condition(pubkey);
    if tx.outputs.iter().any(|o| o.raw().contains(&condition)) {
        return Some(if pending {
            HistoryCategory::Receiving
        } else {
            HistoryCategory::Received
        });
    }
    None
}

#[async_trait]
impl LedgerStore for InMemoryLedgerStore {
    async fn get_available_sources_by_pubkey(
        &self,
        pubkey: &str,
    ) -> Result<Vec<SourceRecord>, StoreError> {
        let condition = sig_condition(pubkey);
        Ok(self
            .sources
            .read()
            .iter()
            .filter(|s| !s.consumed && s.conditions.contains(&condition))
            .cloned()
            .collect())
    }

    async fn get_tx_by_hash(&self, hash: &str) -> Result<Option<TransactionRecord>, StoreError> {
        Ok(self
            .transactions
            .read()
            .iter()
            .find(|tx| tx.hash == hash)
            .cloned())
    }

    async fn get_transactions_history(
        &self,
        pubkey: &str,
    ) -> Result<History<TransactionRecord>, StoreError> {
        let mut history = History::default();
        for tx in self.transactions.read().iter() {
            if let Some(category) = categorize(tx, pubkey) {
                history.category_mut(category).push(tx.clone());
            }
        }
        Ok(history)
    }

    async fn get_transactions_pending(&self) -> Result<Vec<TransactionRecord>, StoreError> {
        Ok(self
            .transactions
            .read()
            .iter()
            .filter(|tx| tx.is_pending())
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SourceKind, StoredEntry};

    const ALICE: &str = "HgTTJLAQ5sqfknMq7yLPZbehtuLSsKj9CxWN7k8QvYJd";
    const BOB: &str = "5ocqzyDMMWf1V8bsoNhWb1iNwax1e9M7VTUN6navs8of";

    fn tx(hash: &str, issuer: &str, recipient: &str, block_number: Option<u64>) -> TransactionRecord {
        TransactionRecord {
            hash: hash.into(),
            version: 10,
            currency: "g1".into(),
            locktime: Some(0),
            blockstamp: None,
            blockstamp_time: None,
            issuers: vec![issuer.into()],
            inputs: vec![],
            unlocks: vec![],
            outputs: vec![StoredEntry::Wrapped {
                raw: format!("100:0:SIG({})", recipient),
            }],
            signatures: vec![],
            comment: None,
            block_number,
            time: Some(0),
            raw: None,
        }
    }

    fn source(identifier: &str, owner: &str) -> SourceRecord {
        SourceRecord {
            kind: SourceKind::Transaction,
            identifier: identifier.into(),
            noffset: 0,
            amount: 100,
            base: 0,
            conditions: format!("SIG({})", owner),
            consumed: false,
        }
    }

    #[tokio::test]
    async fn test_history_partitions_by_role_and_confirmation() {
        let store = InMemoryLedgerStore::new();
        store.insert_transaction(tx("T1", ALICE, BOB, Some(1)));
        store.insert_transaction(tx("T2", BOB, ALICE, Some(2)));
        store.insert_transaction(tx("T3", ALICE, BOB, None));
        store.insert_transaction(tx("T4", BOB, ALICE, None));

        let alice = store.get_transactions_history(ALICE).await.unwrap();
        assert_eq!(alice.sent[0].hash, "T1");
        assert_eq!(alice.received[0].hash, "T2");
        assert_eq!(alice.sending[0].hash, "T3");
        assert_eq!(alice.receiving[0].hash, "T4");
        assert_eq!(alice.len(), 4);
    }

    #[tokio::test]
    async fn test_insert_replaces_same_hash() {
        let store = InMemoryLedgerStore::new();
        store.insert_transaction(tx("T1", ALICE, BOB, None));
        store.insert_transaction(tx("T1", ALICE, BOB, Some(9)));
        assert_eq!(store.transaction_count(), 1);
        assert!(store.get_transactions_pending().await.unwrap().is_empty());
        let found = store.get_tx_by_hash("T1").await.unwrap().unwrap();
        assert_eq!(found.block_number, Some(9));
    }

    #[tokio::test]
    async fn test_available_sources_skip_consumed_and_foreign() {
        let store = InMemoryLedgerStore::new();
        store.add_source(source("S1", ALICE));
        store.add_source(source("S2", BOB));
        store.add_source(source("S3", ALICE));
        assert!(store.consume_source("S1", 0));
        assert!(!store.consume_source("S9", 0));

        let sources = store.get_available_sources_by_pubkey(ALICE).await.unwrap();
        let ids: Vec<_> = sources.iter().map(|s| s.identifier.as_str()).collect();
        assert_eq!(ids, vec!["S3"]);
    }
}
