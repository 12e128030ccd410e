//! Ledger-side error types.

/// Error type returned by [`Ledger`](crate::Ledger) implementations.
///
/// [`MemLedger`](crate::MemLedger) never fails; the `Backend` variant exists
/// for durable backends (RocksDB, a chain state service) exposed behind the
/// same trait.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The underlying store failed (I/O, connection loss, corruption).
    #[error("ledger backend error: {0}")]
    Backend(String),
}
