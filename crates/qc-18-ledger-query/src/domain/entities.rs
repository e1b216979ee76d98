//! # Domain Entities
//!
//! Store-side records and the canonical, transport-ready views built from
//! them. Records are what the ledger store hands over; views are what leaves
//! this crate. The only way from one to the other is the normalizer.

use serde::{Deserialize, Serialize};

/// An input or output line as the store delivers it.
///
/// Depending on how the record was persisted, the store returns either the
/// raw line itself or an object wrapping it (with parsed fields alongside).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredEntry {
    Flat(String),
    Wrapped { raw: String },
}

impl StoredEntry {
    pub fn raw(&self) -> &str {
        match self {
            Self::Flat(raw) | Self::Wrapped { raw } => raw,
        }
    }

    /// Reduce to the flat raw line.
    pub fn into_raw(self) -> String {
        match self {
            Self::Flat(raw) | Self::Wrapped { raw } => raw,
        }
    }
}

impl From<&str> for StoredEntry {
    fn from(raw: &str) -> Self {
        Self::Flat(raw.to_string())
    }
}

/// Transaction document as stored by the ledger.
///
/// `block_number` is the sole marker of confirmation: `None` means pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub hash: String,
    #[serde(default = "default_tx_version")]
    pub version: u32,
    pub currency: String,
    #[serde(default)]
    pub locktime: Option<u64>,
    #[serde(default)]
    pub blockstamp: Option<String>,
    #[serde(default, rename = "blockstampTime")]
    pub blockstamp_time: Option<u64>,
    #[serde(default)]
    pub issuers: Vec<String>,
    #[serde(default)]
    pub inputs: Vec<StoredEntry>,
    #[serde(default)]
    pub unlocks: Vec<String>,
    #[serde(default)]
    pub outputs: Vec<StoredEntry>,
    #[serde(default)]
    pub signatures: Vec<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub block_number: Option<u64>,
    #[serde(default)]
    pub time: Option<u64>,
    /// Raw storage artifact; never exposed.
    #[serde(default)]
    pub raw: Option<String>,
}

fn default_tx_version() -> u32 {
    10
}

impl TransactionRecord {
    pub fn is_pending(&self) -> bool {
        self.block_number.is_none()
    }
}

/// Canonical transaction view.
///
/// Fixed output shape: no `currency` (the envelope carries it) and no
/// storage artifacts. `written_block` mirrors `block_number` for older
/// consumers and only appears on confirmed transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionView {
    pub version: u32,
    pub hash: String,
    pub locktime: Option<u64>,
    pub blockstamp: Option<String>,
    #[serde(rename = "blockstampTime")]
    pub blockstamp_time: Option<u64>,
    pub issuers: Vec<String>,
    pub inputs: Vec<String>,
    pub unlocks: Vec<String>,
    pub outputs: Vec<String>,
    pub signatures: Vec<String>,
    pub comment: Option<String>,
    pub block_number: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub written_block: Option<u64>,
    pub time: Option<u64>,
}

impl TransactionView {
    pub fn is_pending(&self) -> bool {
        self.block_number.is_none()
    }
}

/// The four history categories of one identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryCategory {
    Sent,
    Received,
    Sending,
    Receiving,
}

impl HistoryCategory {
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Sending | Self::Receiving)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Received => "received",
            Self::Sending => "sending",
            Self::Receiving => "receiving",
        }
    }
}

/// Per-identity history partitioned into confirmed and pending categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History<T> {
    pub sent: Vec<T>,
    pub received: Vec<T>,
    pub sending: Vec<T>,
    pub receiving: Vec<T>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self {
            sent: Vec::new(),
            received: Vec::new(),
            sending: Vec::new(),
            receiving: Vec::new(),
        }
    }
}

impl<T> History<T> {
    pub fn category(&self, category: HistoryCategory) -> &[T] {
        match category {
            HistoryCategory::Sent => &self.sent,
            HistoryCategory::Received => &self.received,
            HistoryCategory::Sending => &self.sending,
            HistoryCategory::Receiving => &self.receiving,
        }
    }

    pub fn category_mut(&mut self, category: HistoryCategory) -> &mut Vec<T> {
        match category {
            HistoryCategory::Sent => &mut self.sent,
            HistoryCategory::Received => &mut self.received,
            HistoryCategory::Sending => &mut self.sending,
            HistoryCategory::Receiving => &mut self.receiving,
        }
    }

    /// Apply `f` to every entry, keeping each in its category and order.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> History<U> {
        History {
            sent: self.sent.into_iter().map(&mut f).collect(),
            received: self.received.into_iter().map(&mut f).collect(),
            sending: self.sending.into_iter().map(&mut f).collect(),
            receiving: self.receiving.into_iter().map(&mut f).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.sent.len() + self.received.len() + self.sending.len() + self.receiving.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Kind of an unspent source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceKind {
    /// Output of a transaction
    #[serde(rename = "T")]
    Transaction,
    /// Universal dividend
    #[serde(rename = "D")]
    Dividend,
}

/// Source row as stored by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    /// Origin transaction hash, or issuer pubkey for dividends
    pub identifier: String,
    /// Output index, or block number for dividends
    #[serde(alias = "pos")]
    pub noffset: u64,
    pub amount: u64,
    #[serde(default)]
    pub base: u32,
    pub conditions: String,
    #[serde(default)]
    pub consumed: bool,
}

/// Source as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceView {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub noffset: u64,
    pub identifier: String,
    pub amount: u64,
    pub base: u32,
    pub conditions: String,
}

impl From<SourceRecord> for SourceView {
    fn from(record: SourceRecord) -> Self {
        Self {
            kind: record.kind,
            noffset: record.noffset,
            identifier: record.identifier,
            amount: record.amount,
            base: record.base,
            conditions: record.conditions,
        }
    }
}

/// `{currency, pubkey, sources}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcesResponse {
    pub currency: String,
    pub pubkey: String,
    pub sources: Vec<SourceView>,
}

/// `{currency, pubkey, history}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub currency: String,
    pub pubkey: String,
    pub history: History<TransactionView>,
}

/// `{currency, pending}`; never carries a pubkey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResponse {
    pub currency: String,
    pub pending: Vec<TransactionView>,
}
