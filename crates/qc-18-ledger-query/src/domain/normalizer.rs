//! # Transaction Normalizer
//!
//! Converts store records into canonical views. This is the single place
//! where wrapped inputs/outputs are flattened, `currency` and the raw
//! storage artifact are dropped, and the `written_block` alias is added.

use super::entities::{History, TransactionRecord, TransactionView};

/// Build the canonical view of one stored transaction.
pub fn normalize_transaction(record: TransactionRecord) -> TransactionView {
    // Exhaustive: every record field is either mapped or dropped here.
    let TransactionRecord {
        hash,
        version,
        currency: _,
        locktime,
        blockstamp,
        blockstamp_time,
        issuers,
        inputs,
        unlocks,
        outputs,
        signatures,
        comment,
        block_number,
        time,
        raw: _,
    } = record;

    TransactionView {
        version,
        hash,
        locktime,
        blockstamp,
        blockstamp_time,
        issuers,
        inputs: inputs.into_iter().map(|i| i.into_raw()).collect(),
        unlocks,
        outputs: outputs.into_iter().map(|o| o.into_raw()).collect(),
        signatures,
        comment,
        block_number,
        written_block: block_number,
        time,
    }
}

/// Normalize every entry of a stored history, category by category.
pub fn normalize_history(history: History<TransactionRecord>) -> History<TransactionView> {
    history.map(normalize_transaction)
}

/// Normalize a list of stored transactions, preserving order.
pub fn normalize_all(records: Vec<TransactionRecord>) -> Vec<TransactionView> {
    records.into_iter().map(normalize_transaction).collect()
}
