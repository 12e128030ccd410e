//! In-memory ledger for testing.
//!
//! `MemLedger` implements `Ledger` using a `BTreeMap` for deterministic
//! key ordering. Useful for unit tests and integration tests where a real
//! storage backend is not needed.

use std::collections::BTreeMap;

use crate::error::LedgerError;
use crate::ledger::Ledger;

/// In-memory ledger backed by `BTreeMap`.
///
/// BTreeMap is used instead of HashMap for deterministic iteration order,
/// so seeded test fixtures behave identically across runs and machines.
#[derive(Debug, Clone, Default)]
pub struct MemLedger {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemLedger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    /// Create a ledger pre-populated with data.
    pub fn with_data(data: BTreeMap<Vec<u8>, Vec<u8>>) -> Self {
        Self { data }
    }

    /// Returns the number of entries in the ledger.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Ledger for MemLedger {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), LedgerError> {
        self.data.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), LedgerError> {
        self.data.remove(key);
        Ok(())
    }

    fn contains(&self, key: &[u8]) -> Result<bool, LedgerError> {
        Ok(self.data.contains_key(key))
    }
}
