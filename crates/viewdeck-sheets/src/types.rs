//! Spreadsheet API response types.
//!
//! Only the fields the pipeline reads are modeled. Cell values arrive as
//! formatted strings — locale separators, non-breaking spaces and all —
//! and are only interpreted later by [`crate::normalize`].

use serde::Deserialize;

/// A spreadsheet tab, as listed by the metadata endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetInfo {
    /// Tab title. Date-bearing tabs start with `YYYY-MM-DD`.
    pub title: String,
    /// Numeric tab ID within the spreadsheet.
    pub gid: i64,
}

/// Top-level response from `GET /spreadsheets/{id}?fields=sheets.properties`.
#[derive(Debug, Deserialize)]
pub struct SpreadsheetResponse {
    #[serde(default)]
    pub sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SheetEntry {
    pub properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
pub struct SheetProperties {
    pub title: String,
    /// Absent for some chart-only sheets; defaults to 0.
    #[serde(rename = "sheetId", default)]
    pub sheet_id: i64,
}

/// Response from `GET /spreadsheets/{id}/values/{range}`.
///
/// `values` is omitted entirely for empty tabs, not sent as `[]`.
#[derive(Debug, Deserialize)]
pub struct ValueRangeResponse {
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}
