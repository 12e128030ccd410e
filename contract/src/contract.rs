//! Record lifecycle operations.
//!
//! `RecordContract` validates existence preconditions, encodes and decodes
//! the JSON payload, and issues one state read plus at most one write (or
//! delete) per operation against the injected ledger accessor. The state
//! machine per key is `ABSENT → create → PRESENT → update → PRESENT →
//! delete → ABSENT`; keys may be recreated after deletion.
//!
//! The contract performs no locking, retries, or timeouts. The host
//! serializes conflicting invocations on the same key, so the existence
//! check and the mutation within one call are observably atomic to callers.

use record_hostapi::Ledger;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ContractError;
use crate::record::{Greeting, Record};

/// Default reserved key holding the instantiation sentinel.
pub const GREETING_KEY: &str = "GREETING";

/// The record lifecycle contract.
///
/// Holds no ledger state of its own; the accessor is passed by reference
/// into each operation. The only configuration is the reserved key used by
/// [`instantiate`](Self::instantiate) and
/// [`set_greeting`](Self::set_greeting).
#[derive(Debug, Clone)]
pub struct RecordContract {
    greeting_key: String,
}

impl Default for RecordContract {
    fn default() -> Self {
        Self {
            greeting_key: GREETING_KEY.to_owned(),
        }
    }
}

impl RecordContract {
    /// Create a contract using the default reserved greeting key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a contract with a custom reserved greeting key.
    pub fn with_greeting_key(key: impl Into<String>) -> Self {
        Self {
            greeting_key: key.into(),
        }
    }

    /// The reserved key this contract writes its sentinel under.
    pub fn greeting_key(&self) -> &str {
        &self.greeting_key
    }

    /// Lifecycle hook, invoked once at contract activation.
    ///
    /// Writes the fixed sentinel `{"text":"Instantiate was called!"}` under
    /// the reserved key, proving the contract is reachable. Not part of the
    /// record CRUD surface.
    pub fn instantiate<L: Ledger + ?Sized>(&self, ledger: &mut L) -> Result<(), ContractError> {
        info!(key = %self.greeting_key, "instantiate");
        let bytes = encode(&self.greeting_key, &Greeting::new("Instantiate was called!"))?;
        ledger.put(self.greeting_key.as_bytes(), &bytes)?;
        Ok(())
    }

    /// Check whether a record exists under `key`.
    ///
    /// Issues one state read; returns true iff the stored byte sequence is
    /// non-empty. Never fails for a missing key — absence is a valid
    /// (false) result, not an error. No side effects.
    pub fn exists_record<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        key: &str,
    ) -> Result<bool, ContractError> {
        let stored = ledger.get(key.as_bytes())?;
        Ok(stored.is_some_and(|bytes| !bytes.is_empty()))
    }

    /// Create a record under `key`.
    ///
    /// Fails with [`ContractError::AlreadyExists`] if the key is present;
    /// the write is not attempted in that case.
    pub fn create_record<L: Ledger + ?Sized>(
        &self,
        ledger: &mut L,
        key: &str,
        value: &str,
    ) -> Result<(), ContractError> {
        if self.exists_record(ledger, key)? {
            return Err(ContractError::AlreadyExists {
                key: key.to_owned(),
            });
        }
        debug!(key, "create record");
        let bytes = encode(key, &Record::new(value))?;
        ledger.put(key.as_bytes(), &bytes)?;
        Ok(())
    }

    /// Read the record under `key`.
    ///
    /// Fails with [`ContractError::NotFound`] if the key is absent and
    /// [`ContractError::CorruptRecord`] if the stored bytes do not decode
    /// as `{"value": <string>}`. The existence check and the payload read
    /// are the same single state read. No side effects.
    pub fn read_record<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        key: &str,
    ) -> Result<Record, ContractError> {
        debug!(key, "read record");
        let bytes = self.read_present(ledger, key)?;
        Record::from_bytes(&bytes).map_err(|source| ContractError::CorruptRecord {
            key: key.to_owned(),
            source,
        })
    }

    /// Replace the record under `key` with `{"value": new_value}`.
    ///
    /// A full replace, not a patch: the prior content becomes unreadable.
    /// Fails with [`ContractError::NotFound`] if the key is absent.
    pub fn update_record<L: Ledger + ?Sized>(
        &self,
        ledger: &mut L,
        key: &str,
        new_value: &str,
    ) -> Result<(), ContractError> {
        if !self.exists_record(ledger, key)? {
            return Err(ContractError::NotFound {
                key: key.to_owned(),
            });
        }
        debug!(key, "update record");
        let bytes = encode(key, &Record::new(new_value))?;
        ledger.put(key.as_bytes(), &bytes)?;
        Ok(())
    }

    /// Delete the record under `key`.
    ///
    /// Fails with [`ContractError::NotFound`] if the key is absent. There
    /// is no tombstone: the key may be recreated afterwards.
    pub fn delete_record<L: Ledger + ?Sized>(
        &self,
        ledger: &mut L,
        key: &str,
    ) -> Result<(), ContractError> {
        if !self.exists_record(ledger, key)? {
            return Err(ContractError::NotFound {
                key: key.to_owned(),
            });
        }
        debug!(key, "delete record");
        ledger.delete(key.as_bytes())?;
        Ok(())
    }

    /// Write `{"text": text}` under the reserved key and return the
    /// serialized JSON text.
    ///
    /// Unlike record CRUD there is no existence precondition; the sentinel
    /// is replaced unconditionally.
    pub fn set_greeting<L: Ledger + ?Sized>(
        &self,
        ledger: &mut L,
        text: &str,
    ) -> Result<String, ContractError> {
        info!(key = %self.greeting_key, text, "set greeting");
        let json = serde_json::to_string(&Greeting::new(text)).map_err(|source| {
            ContractError::CorruptRecord {
                key: self.greeting_key.clone(),
                source,
            }
        })?;
        ledger.put(self.greeting_key.as_bytes(), json.as_bytes())?;
        Ok(json)
    }

    /// Look up the raw JSON stored under any key, including the reserved
    /// greeting key.
    ///
    /// The stored bytes are parsed and re-serialized, so the returned text
    /// is always well-formed JSON. Fails with [`ContractError::NotFound`]
    /// for an absent key and [`ContractError::CorruptRecord`] for non-JSON
    /// bytes.
    pub fn query<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        key: &str,
    ) -> Result<String, ContractError> {
        debug!(key, "query");
        let bytes = self.read_present(ledger, key)?;
        let parsed: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|source| ContractError::CorruptRecord {
                key: key.to_owned(),
                source,
            })?;
        serde_json::to_string(&parsed).map_err(|source| ContractError::CorruptRecord {
            key: key.to_owned(),
            source,
        })
    }

    /// Single state read that enforces the presence precondition.
    ///
    /// An empty stored byte sequence counts as absent, matching
    /// [`exists_record`](Self::exists_record).
    fn read_present<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        key: &str,
    ) -> Result<Vec<u8>, ContractError> {
        ledger
            .get(key.as_bytes())?
            .filter(|bytes| !bytes.is_empty())
            .ok_or_else(|| ContractError::NotFound {
                key: key.to_owned(),
            })
    }
}

/// Encode a payload to its JSON wire bytes.
///
/// Unreachable in practice for these flat string structs, but the error is
/// propagated rather than unwrapped, attributed to the key being written.
fn encode<T: Serialize>(key: &str, payload: &T) -> Result<Vec<u8>, ContractError> {
    serde_json::to_vec(payload).map_err(|source| ContractError::CorruptRecord {
        key: key.to_owned(),
        source,
    })
}
