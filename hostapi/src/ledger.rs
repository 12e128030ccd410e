//! Ledger accessor abstraction for the record contract.
//!
//! `Ledger` defines the interface the contract uses to reach host-managed
//! state. The host injects an implementation into each invocation; the
//! contract never owns or constructs the backend itself.
//!
//! Implementations:
//! - `MemLedger` (this crate) — in-memory BTreeMap for tests and embedding
//! - durable backends (RocksDB, a chain state service) on the host side

use crate::error::LedgerError;

/// Abstraction over host-managed key-value state.
///
/// Keys and values are opaque byte sequences under the contract's control.
/// Implementations must be deterministic: the same key always returns the
/// same value for a given state, and each `put` replaces the full stored
/// value atomically.
pub trait Ledger: Send + Sync {
    /// Get the value for a key.
    ///
    /// Returns `Ok(None)` if the key does not exist. Absence is a valid
    /// result, not an error.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Write a key-value pair, fully replacing any prior value.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), LedgerError>;

    /// Remove a key.
    ///
    /// Removing an absent key is accepted at this layer; existence
    /// preconditions are enforced by the contract above it.
    fn delete(&mut self, key: &[u8]) -> Result<(), LedgerError>;

    /// Check if a key exists.
    ///
    /// Default implementation uses `get()`, but backends may optimize this.
    fn contains(&self, key: &[u8]) -> Result<bool, LedgerError> {
        Ok(self.get(key)?.is_some())
    }
}
