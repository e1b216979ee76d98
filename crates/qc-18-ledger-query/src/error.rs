//! Error types for the Ledger Query subsystem

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON-RPC style error codes handed to the gateway
pub mod codes {
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
    pub const RESOURCE_NOT_FOUND: i32 = -32001;
}

/// Errors produced by query operations.
///
/// `ParameterInvalid` and `TxNotFound` are the only errors originated here.
/// Everything the store raises is carried unchanged in `Store`.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Invalid parameter `{name}`: {reason}")]
    ParameterInvalid { name: &'static str, reason: String },

    #[error("Transaction not found: {hash}")]
    TxNotFound { hash: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl QueryError {
    pub fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::ParameterInvalid {
            name,
            reason: reason.into(),
        }
    }

    /// Stable code for mapping to a caller-facing status.
    pub fn code(&self) -> i32 {
        match self {
            Self::ParameterInvalid { .. } => codes::INVALID_PARAMS,
            Self::TxNotFound { .. } => codes::RESOURCE_NOT_FOUND,
            Self::Store(_) => codes::INTERNAL_ERROR,
        }
    }
}

/// Failures raised by a ledger store backend.
///
/// Opaque to this crate and passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Store backend error: {message}")]
    Backend { message: String },
}

/// Configuration and startup errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid currency identifier: {0:?}")]
    InvalidCurrency(String),

    #[error("Failed to initialise tracing: {0}")]
    TracingInit(String),
}

/// Serializable error returned by the method dispatcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiQueryError {
    pub code: i32,
    pub message: String,
}

impl ApiQueryError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: codes::METHOD_NOT_FOUND,
            message: format!("Method not found: {}", method),
        }
    }
}

impl From<QueryError> for ApiQueryError {
    fn from(err: QueryError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for ApiQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiQueryError {}
