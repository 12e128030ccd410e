//! Persisted payload types and their JSON wire encoding.
//!
//! Stored and returned payloads are UTF-8 JSON text with exact field sets:
//! a record is `{"value": <string>}`, the instantiation sentinel is
//! `{"text": <string>}`. Unknown fields are rejected on decode so schema
//! drift surfaces as a decode failure instead of silent data loss.

use serde::{Deserialize, Serialize};

/// The record entity this contract manages.
///
/// A single flat string field, wrapped in an object before serialization.
/// The key is not part of the payload; it lives in the ledger addressing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    /// The sole payload field.
    pub value: String,
}

impl Record {
    /// Build a record from its payload value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Serialize to the JSON wire encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Decode from stored ledger bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

/// Sentinel payload written under the reserved key by `instantiate` and
/// `set_greeting`, proving the contract is reachable. Not part of the
/// record CRUD surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Greeting {
    /// Free-form greeting text.
    pub text: String,
}

impl Greeting {
    /// Build a greeting from its text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_encoding_is_exact() {
        let record = Record::new("hello");
        let bytes = record.to_bytes().unwrap();
        assert_eq!(bytes, br#"{"value":"hello"}"#);
    }

    #[test]
    fn test_record_round_trip() {
        let record = Record::new("some payload with \"quotes\" and unicode ✓");
        let decoded = Record::from_bytes(&record.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_record_rejects_unknown_fields() {
        let result = Record::from_bytes(br#"{"value":"v","extra":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_rejects_missing_value() {
        assert!(Record::from_bytes(b"{}").is_err());
        assert!(Record::from_bytes(br#"{"text":"wrong field"}"#).is_err());
    }

    #[test]
    fn test_greeting_wire_encoding() {
        let greeting = Greeting::new("Instantiate was called!");
        let json = serde_json::to_string(&greeting).unwrap();
        assert_eq!(json, r#"{"text":"Instantiate was called!"}"#);
    }
}
