pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::LedgerClient;
pub use error::LedgerError;
pub use normalize::{expense_total, income_total, ingest, normalize_transaction};
pub use types::{RawTransaction, TransactionsResponse};
