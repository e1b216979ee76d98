//! # Parameter Resolver
//!
//! Extracts and validates request parameters from JSON params. Every
//! failure is a `ParameterInvalid` and happens before the store is touched.

use serde_json::Value;

use crate::domain::{PublicKey, TxHash};
use crate::error::QueryError;

fn required<'a>(params: &'a Value, name: &'static str) -> Result<&'a Value, QueryError> {
    match params.get(name) {
        Some(Value::Null) | None => Err(QueryError::parameter(name, "parameter is required")),
        Some(value) => Ok(value),
    }
}

fn required_str<'a>(params: &'a Value, name: &'static str) -> Result<&'a str, QueryError> {
    required(params, name)?
        .as_str()
        .ok_or_else(|| QueryError::parameter(name, "expected a string"))
}

/// Resolve the `pubkey` parameter.
pub fn resolve_pubkey(params: &Value) -> Result<PublicKey, QueryError> {
    PublicKey::parse(required_str(params, "pubkey")?)
}

/// Resolve the `hash` parameter.
pub fn resolve_hash(params: &Value) -> Result<TxHash, QueryError> {
    TxHash::parse(required_str(params, "hash")?)
}

/// Resolve a numeric range bound (`from` / `to`).
///
/// Accepts a non-negative JSON integer or a string of decimal digits, since
/// path parameters arrive as strings.
pub fn resolve_bound(params: &Value, name: &'static str) -> Result<u64, QueryError> {
    let invalid = || QueryError::parameter(name, "is not a valid integer");
    match required(params, name)? {
        Value::Number(n) => n.as_u64().ok_or_else(invalid),
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse::<u64>().map_err(|_| invalid())
        }
        _ => Err(invalid()),
    }
}

/// Resolve `from` then `to`.
pub fn resolve_range(params: &Value) -> Result<(u64, u64), QueryError> {
    Ok((resolve_bound(params, "from")?, resolve_bound(params, "to")?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PUBKEY: &str = "HgTTJLAQ5sqfknMq7yLPZbehtuLSsKj9CxWN7k8QvYJd";

    fn invalid_name(err: QueryError) -> &'static str {
        match err {
            QueryError::ParameterInvalid { name, .. } => name,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_pubkey() {
        let key = resolve_pubkey(&json!({ "pubkey": PUBKEY })).unwrap();
        assert_eq!(key.as_str(), PUBKEY);
        assert_eq!(invalid_name(resolve_pubkey(&json!({})).unwrap_err()), "pubkey");
        assert_eq!(
            invalid_name(resolve_pubkey(&json!({ "pubkey": 12 })).unwrap_err()),
            "pubkey"
        );
        assert!(resolve_pubkey(&json!({ "pubkey": "short" })).is_err());
    }

    #[test]
    fn test_resolve_hash() {
        let hash = "0123456789ABCDEF".repeat(4);
        assert_eq!(resolve_hash(&json!({ "hash": hash })).unwrap().as_str(), hash);
        assert_eq!(
            invalid_name(resolve_hash(&json!({ "hash": null })).unwrap_err()),
            "hash"
        );
    }

    #[test]
    fn test_resolve_bound_accepts_numbers_and_digit_strings() {
        assert_eq!(resolve_bound(&json!({ "from": 5 }), "from").unwrap(), 5);
        assert_eq!(resolve_bound(&json!({ "from": "15" }), "from").unwrap(), 15);
    }

    #[test]
    fn test_resolve_bound_rejects_non_numeric() {
        for bad in [json!("abc"), json!("-1"), json!(""), json!(-3), json!(1.5), json!(true)] {
            let err = resolve_bound(&json!({ "to": bad }), "to").unwrap_err();
            assert_eq!(invalid_name(err), "to");
        }
        let err = resolve_bound(&json!({ "to": "99999999999999999999999" }), "to").unwrap_err();
        assert_eq!(invalid_name(err), "to");
        assert!(resolve_bound(&json!({}), "from").is_err());
    }

    #[test]
    fn test_resolve_range_reports_first_bad_bound() {
        assert_eq!(resolve_range(&json!({ "from": 1, "to": "2" })).unwrap(), (1, 2));
        let err = resolve_range(&json!({ "from": "x", "to": "y" })).unwrap_err();
        assert_eq!(invalid_name(err), "from");
    }
}
