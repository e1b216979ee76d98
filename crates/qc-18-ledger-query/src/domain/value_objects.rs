//! # Value Objects
//!
//! Validated identifiers and range bounds. Once constructed these can no
//! longer be malformed, so service operations never re-check them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::QueryError;

/// Base58 alphabet (no `0`, `O`, `I`, `l`).
const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Accepted public key lengths in base58 characters.
pub const PUBKEY_MIN_LEN: usize = 43;
pub const PUBKEY_MAX_LEN: usize = 44;

/// Transaction hash length in hex characters (SHA-256).
pub const TX_HASH_LEN: usize = 64;

/// Public key of an identity, base58 encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicKey(String);

impl PublicKey {
    pub fn parse(value: &str) -> Result<Self, QueryError> {
        let len = value.chars().count();
        if !(PUBKEY_MIN_LEN..=PUBKEY_MAX_LEN).contains(&len) {
            return Err(QueryError::parameter(
                "pubkey",
                format!("expected {}-{} characters, got {}", PUBKEY_MIN_LEN, PUBKEY_MAX_LEN, len),
            ));
        }
        if let Some(bad) = value.chars().find(|c| !BASE58_ALPHABET.contains(*c)) {
            return Err(QueryError::parameter(
                "pubkey",
                format!("invalid base58 character {:?}", bad),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Transaction hash: 64 uppercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxHash(String);

impl TxHash {
    pub fn parse(value: &str) -> Result<Self, QueryError> {
        if value.len() != TX_HASH_LEN {
            return Err(QueryError::parameter(
                "hash",
                format!("expected {} hex characters, got {}", TX_HASH_LEN, value.len()),
            ));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
        {
            return Err(QueryError::parameter(
                "hash",
                "must be uppercase hexadecimal",
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed interval `[from, to]` over block numbers or timestamps.
///
/// `from > to` is accepted and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusiveRange {
    pub from: u64,
    pub to: u64,
}

impl InclusiveRange {
    pub fn new(from: u64, to: u64) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, value: u64) -> bool {
        self.from <= value && value <= self.to
    }

    /// A missing value never falls inside a range.
    pub fn contains_opt(&self, value: Option<u64>) -> bool {
        value.is_some_and(|v| self.contains(v))
    }
}
