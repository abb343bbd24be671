pub mod client;
pub mod error;
pub mod labels;
pub mod normalize;
pub mod retry;
pub mod types;

pub use client::SheetsClient;
pub use error::SheetsError;
pub use labels::{is_date_label, partition_date_tabs};
pub use normalize::{normalize_row, parse_channels, parse_metric};
pub use types::SheetInfo;
