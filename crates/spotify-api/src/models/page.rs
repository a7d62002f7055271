//! Generic paging envelope used by listing endpoints.

use serde::{Deserialize, Serialize};

/// A page of results.
///
/// Spotify wraps every listing in this envelope. Pagination is driven by
/// `limit`/`offset` request parameters; `next` is a ready-made URL for the
/// following page, or null on the last one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,

    /// Total number of items across all pages.
    pub total: u32,

    /// The maximum number of items per page.
    #[serde(default)]
    pub limit: u32,

    /// The offset of this page.
    #[serde(default)]
    pub offset: u32,

    /// URL of the next page, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}
