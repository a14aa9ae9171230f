//! Server-side grid protocol - request parameters and listing responses.
//!
//! The admin API paginates, sorts, and filters on the server. Each fetch
//! carries a monotonically increasing `draw` counter which the server
//! echoes back, so late replies to superseded requests can be discarded.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// One outgoing listing request, built at fetch time so filter values are
/// always current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridQuery {
    pub draw: u64,
    /// Zero-based row offset.
    pub start: u64,
    /// Page size.
    pub length: u64,
    /// Data path of the column being sorted.
    pub order_col: String,
    pub order_dir: SortDir,
    /// Global search box value.
    pub search: String,
    /// Named entity filters (e.g. `("status", "active")`).
    pub filters: Vec<(String, String)>,
}

impl GridQuery {
    /// Flatten into query-string parameters. Empty filter values are
    /// omitted so the server applies no constraint for them.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("draw".to_string(), self.draw.to_string()),
            ("start".to_string(), self.start.to_string()),
            ("length".to_string(), self.length.to_string()),
            ("order_col".to_string(), self.order_col.clone()),
            ("order_dir".to_string(), self.order_dir.as_str().to_string()),
        ];
        if !self.search.trim().is_empty() {
            params.push(("search".to_string(), self.search.trim().to_string()));
        }
        for (name, value) in &self.filters {
            if !value.trim().is_empty() {
                params.push((name.clone(), value.trim().to_string()));
            }
        }
        params
    }
}

/// One page of server-filtered rows.
#[derive(Debug, Clone, Deserialize)]
pub struct GridPage {
    #[serde(default)]
    pub draw: u64,
    #[serde(rename = "data")]
    pub rows: Vec<serde_json::Value>,
    #[serde(rename = "recordsTotal")]
    pub records_total: u64,
    #[serde(rename = "recordsFiltered")]
    pub records_filtered: u64,
    #[serde(default)]
    pub summary: Option<serde_json::Value>,
}
