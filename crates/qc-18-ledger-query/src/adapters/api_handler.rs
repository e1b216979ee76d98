//! # API Gateway Handler
//!
//! Adapter for handling ledger queries routed by the API Gateway.
//!
//! ```text
//! Client → qc-16 (API Gateway) → handle_api_query → LedgerQueryApi → LedgerStore
//! ```
//!
//! Parameters are resolved in full before the service is called, so a bad
//! parameter never costs a store round trip.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::params::{resolve_hash, resolve_pubkey, resolve_range};
use crate::error::{codes, ApiQueryError, QueryError};
use crate::ports::LedgerQueryApi;

/// Subsystem name reported by `ping`
pub const SUBSYSTEM_NAME: &str = "qc-18-ledger-query";

/// API Gateway handler for qc-18.
pub struct ApiGatewayHandler<S> {
    service: S,
}

impl<S: LedgerQueryApi> ApiGatewayHandler<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Handle ping request (health check).
    pub fn handle_ping(&self) -> Value {
        serde_json::json!({
            "status": "ok",
            "subsystem": SUBSYSTEM_NAME
        })
    }
}

/// Handle an API query from qc-16.
///
/// ## Supported Methods
///
/// - `ping`: Health check
/// - `get_sources`: Unspent sources (`pubkey`)
/// - `get_transaction`: Transaction by hash (`hash`)
/// - `get_history`: Full history (`pubkey`)
/// - `get_history_blocks`: History by block range (`pubkey`, `from`, `to`)
/// - `get_history_times`: History by time range (`pubkey`, `from`, `to`)
/// - `get_history_pending`: Pending history (`pubkey`)
/// - `get_pending`: Global pending transactions
pub async fn handle_api_query<S: LedgerQueryApi>(
    handler: &ApiGatewayHandler<S>,
    method: &str,
    params: &Value,
) -> Result<Value, ApiQueryError> {
    let service = &handler.service;
    let failed = |err: QueryError| {
        if let QueryError::Store(store_err) = &err {
            warn!(method, error = %store_err, "[qc-18] Store failure");
        }
        ApiQueryError::from(err)
    };

    match method {
        "ping" => Ok(handler.handle_ping()),
        "get_sources" => {
            let pubkey = resolve_pubkey(params)?;
            to_json(service.sources(&pubkey).await.map_err(failed)?)
        }
        "get_transaction" => {
            let hash = resolve_hash(params)?;
            to_json(service.transaction(&hash).await.map_err(failed)?)
        }
        "get_history" => {
            let pubkey = resolve_pubkey(params)?;
            to_json(service.history(&pubkey).await.map_err(failed)?)
        }
        "get_history_blocks" => {
            let pubkey = resolve_pubkey(params)?;
            let (from, to) = resolve_range(params)?;
            let response = service
                .history_between_blocks(&pubkey, from, to)
                .await
                .map_err(failed)?;
            to_json(response)
        }
        "get_history_times" => {
            let pubkey = resolve_pubkey(params)?;
            let (from, to) = resolve_range(params)?;
            let response = service
                .history_between_times(&pubkey, from, to)
                .await
                .map_err(failed)?;
            to_json(response)
        }
        "get_history_pending" => {
            let pubkey = resolve_pubkey(params)?;
            to_json(service.pending_for(&pubkey).await.map_err(failed)?)
        }
        "get_pending" => to_json(service.pending().await.map_err(failed)?),
        _ => Err(ApiQueryError::method_not_found(method)),
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value, ApiQueryError> {
    serde_json::to_value(value).map_err(|e| ApiQueryError {
        code: codes::INTERNAL_ERROR,
        message: format!("Serialization error: {}", e),
    })
}
