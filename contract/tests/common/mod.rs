//! Shared test helpers for the contract integration tests.
//!
//! Provides a seeded ledger fixture matching the shape real deployments
//! leave behind: two records stored as exact JSON wire bytes.

#![allow(dead_code)]

use std::collections::BTreeMap;

use record_hostapi::MemLedger;

/// Keys present in the seeded fixture.
pub const SEEDED_KEYS: [&str; 2] = ["1001", "1002"];

/// Ledger pre-populated with records under "1001" and "1002".
pub fn seeded_ledger() -> MemLedger {
    let mut data = BTreeMap::new();
    data.insert(
        b"1001".to_vec(),
        br#"{"value":"record 1001 value"}"#.to_vec(),
    );
    data.insert(
        b"1002".to_vec(),
        br#"{"value":"record 1002 value"}"#.to_vec(),
    );
    MemLedger::with_data(data)
}
