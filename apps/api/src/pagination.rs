//! Offset pagination and hypermedia links for list endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 10;

/// Raw `?page=&page_size=` query values.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl PageQuery {
    /// Non-positive or missing values fall back to the defaults (page 1,
    /// 10 items).
    pub fn normalize(self) -> (i64, i64) {
        let page = match self.page {
            Some(page) if page > 0 => page,
            _ => DEFAULT_PAGE,
        };
        let page_size = match self.page_size {
            Some(size) if size > 0 => size,
            _ => DEFAULT_PAGE_SIZE,
        };
        (page, page_size)
    }
}

pub fn offset(page: i64, page_size: i64) -> i64 {
    (page - 1) * page_size
}

/// A hypermedia link attached to each list item.
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub rel: &'static str,
    pub href: String,
}

impl Link {
    pub fn new(rel: &'static str, href: String) -> Self {
        Link { rel, href }
    }
}

/// Paginated list envelope. `trace_id` correlates the response with logs.
#[derive(Debug, Serialize)]
pub struct Paged<T> {
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub trace_id: Uuid,
    pub items: Vec<T>,
}
