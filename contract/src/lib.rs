//! `record-contract` — record lifecycle contract over an injected ledger.
//!
//! This crate implements the record-management contract: CRUD-style
//! operations on JSON-encoded records addressed by a string key. It
//! enforces:
//!
//! - **Existence preconditions:** create requires absence, read/update/
//!   delete require presence; violations fail before any write
//! - **Wire encoding:** UTF-8 JSON text with exact field sets
//!   (`{"value": <string>}` for records, `{"text": <string>}` for the
//!   instantiation sentinel)
//! - **One state operation per call:** each operation issues one read plus
//!   at most one write or delete against the injected accessor
//!
//! The ledger accessor comes from `record-hostapi` and is passed by
//! reference into each operation; the contract holds no state of its own
//! beyond the reserved greeting key. The primary entry point is
//! [`RecordContract`].

pub mod contract;
pub mod error;
pub mod record;

pub use contract::{RecordContract, GREETING_KEY};
pub use error::ContractError;
pub use record::{Greeting, Record};
