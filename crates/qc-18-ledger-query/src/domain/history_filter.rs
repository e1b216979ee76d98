//! # History Filter
//!
//! Query-type policy over a normalized four-category history.
//!
//! | Mode | sent / received | sending / receiving |
//! |------|-----------------|---------------------|
//! | `Full` | unchanged | unchanged |
//! | `BlockRange` | `from <= block_number <= to` | empty |
//! | `TimeRange` | `from <= time <= to` | empty |
//! | `PendingOnly` | empty | unchanged |
//!
//! Pending entries have no block number, so block ranges can never match
//! them. Time ranges exclude them as well even though pending entries carry
//! a time: range queries only look at settled history.

use serde::{Deserialize, Serialize};

use super::entities::{History, TransactionView};
use super::value_objects::InclusiveRange;

/// History query mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryFilter {
    Full,
    BlockRange(InclusiveRange),
    TimeRange(InclusiveRange),
    PendingOnly,
}

impl HistoryFilter {
    pub fn blocks(from: u64, to: u64) -> Self {
        Self::BlockRange(InclusiveRange::new(from, to))
    }

    pub fn times(from: u64, to: u64) -> Self {
        Self::TimeRange(InclusiveRange::new(from, to))
    }

    /// Produce a filtered copy; `history` is left untouched.
    pub fn apply(&self, history: &History<TransactionView>) -> History<TransactionView> {
        match self {
            Self::Full => history.clone(),
            Self::BlockRange(range) => confirmed_within(history, |tx| {
                range.contains_opt(tx.block_number)
            }),
            Self::TimeRange(range) => confirmed_within(history, |tx| range.contains_opt(tx.time)),
            Self::PendingOnly => History {
                sent: Vec::new(),
                received: Vec::new(),
                sending: history.sending.clone(),
                receiving: history.receiving.clone(),
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::BlockRange(_) => "blocks",
            Self::TimeRange(_) => "times",
            Self::PendingOnly => "pending",
        }
    }
}

fn confirmed_within(
    history: &History<TransactionView>,
    keep: impl Fn(&TransactionView) -> bool,
) -> History<TransactionView> {
    let select = |txs: &[TransactionView]| -> Vec<TransactionView> {
        txs.iter().filter(|tx| keep(tx)).cloned().collect()
    };
    History {
        sent: select(&history.sent),
        received: select(&history.received),
        sending: Vec::new(),
        receiving: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tx(hash: &str, block_number: Option<u64>, time: u64) -> TransactionView {
        TransactionView {
            version: 10,
            hash: hash.to_string(),
            locktime: Some(0),
            blockstamp: None,
            blockstamp_time: None,
            issuers: vec![],
            inputs: vec![],
            unlocks: vec![],
            outputs: vec![],
            signatures: vec![],
            comment: None,
            block_number,
            written_block: block_number,
            time: Some(time),
        }
    }

    fn sample() -> History<TransactionView> {
        History {
            sent: vec![tx("H1", Some(10), 100)],
            received: vec![],
            sending: vec![tx("H2", None, 200)],
            receiving: vec![],
        }
    }

    fn hashes(txs: &[TransactionView]) -> Vec<&str> {
        txs.iter().map(|t| t.hash.as_str()).collect()
    }

    #[test]
    fn test_full_passes_everything() {
        assert_eq!(HistoryFilter::Full.apply(&sample()), sample());
    }

    #[test]
    fn test_block_range_hit() {
        let out = HistoryFilter::blocks(5, 15).apply(&sample());
        assert_eq!(hashes(&out.sent), vec!["H1"]);
        assert!(out.received.is_empty());
        assert!(out.sending.is_empty());
        assert!(out.receiving.is_empty());
    }

    #[test]
    fn test_block_range_miss() {
        let out = HistoryFilter::blocks(20, 30).apply(&sample());
        assert!(out.is_empty());
    }

    #[test]
    fn test_block_range_bounds_are_inclusive() {
        assert_eq!(HistoryFilter::blocks(10, 10).apply(&sample()).sent.len(), 1);
        assert_eq!(HistoryFilter::blocks(10, 12).apply(&sample()).sent.len(), 1);
        assert_eq!(HistoryFilter::blocks(8, 10).apply(&sample()).sent.len(), 1);
    }

    #[test]
    fn test_pending_only() {
        let out = HistoryFilter::PendingOnly.apply(&sample());
        assert!(out.sent.is_empty());
        assert!(out.received.is_empty());
        assert_eq!(hashes(&out.sending), vec!["H2"]);
        assert!(out.receiving.is_empty());
    }

    #[test]
    fn test_time_range_excludes_pending_even_when_time_matches() {
        let out = HistoryFilter::times(150, 250).apply(&sample());
        assert!(out.is_empty());

        let out = HistoryFilter::times(100, 100).apply(&sample());
        assert_eq!(hashes(&out.sent), vec!["H1"]);
        assert!(out.sending.is_empty());
    }

    #[test]
    fn test_confirmed_entry_without_block_number_never_matches() {
        let history = History {
            sent: vec![],
            received: vec![tx("H3", None, 100)],
            sending: vec![],
            receiving: vec![],
        };
        let out = HistoryFilter::blocks(0, u64::MAX).apply(&history);
        assert!(out.received.is_empty());
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let history = sample();
        let _ = HistoryFilter::PendingOnly.apply(&history);
        let _ = HistoryFilter::blocks(0, 1).apply(&history);
        assert_eq!(history, sample());
    }

    proptest! {
        #[test]
        fn prop_block_range_matches_predicate(h in 0u64..1000, a in 0u64..1000, b in 0u64..1000) {
            let history = History {
                sent: vec![],
                received: vec![tx("H", Some(h), 0)],
                sending: vec![tx("P", None, h)],
                receiving: vec![tx("Q", None, h)],
            };
            let out = HistoryFilter::blocks(a, b).apply(&history);
            prop_assert_eq!(out.received.len() == 1, a <= h && h <= b);
            prop_assert!(out.sending.is_empty());
            prop_assert!(out.receiving.is_empty());
        }

        #[test]
        fn prop_time_range_matches_predicate(t in 0u64..1000, a in 0u64..1000, b in 0u64..1000) {
            let history = History {
                sent: vec![tx("H", Some(1), t)],
                received: vec![],
                sending: vec![tx("P", None, t)],
                receiving: vec![],
            };
            let out = HistoryFilter::times(a, b).apply(&history);
            prop_assert_eq!(out.sent.len() == 1, a <= t && t <= b);
            prop_assert!(out.sending.is_empty());
        }

        #[test]
        fn prop_pending_only_empties_confirmed(n in 0usize..5, m in 0usize..5) {
            let history = History {
                sent: (0..n).map(|i| tx("S", Some(i as u64), 0)).collect(),
                received: (0..m).map(|i| tx("R", Some(i as u64), 0)).collect(),
                sending: (0..m).map(|_| tx("P", None, 0)).collect(),
                receiving: (0..n).map(|_| tx("Q", None, 0)).collect(),
            };
            let out = HistoryFilter::PendingOnly.apply(&history);
            prop_assert!(out.sent.is_empty());
            prop_assert!(out.received.is_empty());
            prop_assert_eq!(out.sending.len(), m);
            prop_assert_eq!(out.receiving.len(), n);
        }
    }
}
