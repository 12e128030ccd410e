//! Contract error types.

use record_hostapi::LedgerError;

/// Failures of a record contract invocation.
///
/// Precondition failures (`AlreadyExists`, `NotFound`) are raised before
/// any write is attempted, so a failed invocation leaves ledger state
/// unchanged for the key. Every variant carries the offending key for
/// diagnosability.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// Create on a key that already holds a record.
    #[error("the record {key} already exists")]
    AlreadyExists {
        /// Key the caller attempted to create.
        key: String,
    },

    /// Read, update, delete, or query on an absent key.
    #[error("the record {key} does not exist")]
    NotFound {
        /// Key the caller addressed.
        key: String,
    },

    /// Stored bytes under the key are not valid JSON for the expected
    /// shape. The contract fails closed rather than guessing at the
    /// content.
    #[error("corrupt record under {key}: {source}")]
    CorruptRecord {
        /// Key whose stored bytes failed to decode.
        key: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The injected ledger accessor failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
