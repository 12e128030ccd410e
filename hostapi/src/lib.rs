//! `record-hostapi` — ledger accessor trait and types for the record contract.
//!
//! This crate defines the host-side capability the contract consumes. The
//! host owns the actual state engine (consensus, persistence, ordering);
//! the contract only sees this interface. It provides:
//!
//! - `Ledger` trait — backend key-value state abstraction
//! - `MemLedger` — in-memory `Ledger` for testing and embedding
//! - `LedgerError` — backend failure type

pub mod error;
pub mod ledger;
pub mod mem_ledger;

// Re-export commonly used types at the crate root.
pub use error::LedgerError;
pub use ledger::Ledger;
pub use mem_ledger::MemLedger;
