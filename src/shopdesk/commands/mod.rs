//! Business logic for each operation, independent of any UI.
//!
//! Command functions take the owned state (collections, settings records, the
//! store adapter, the event bus) as arguments and return plain Rust types.
//! Nothing here writes to stdout or assumes a terminal; the CLI formats
//! whatever comes back.

use crate::table::TableView;

pub mod customers;
pub mod orders;
pub mod profile;
pub mod search;

/// Pagination metadata for one rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    /// Zero-based index of the first visible row.
    pub page_start: usize,
}

impl PageInfo {
    pub(crate) fn from_view<R>(view: &TableView<'_, R>, page: usize) -> Self {
        Self {
            page,
            total_pages: view.total_pages,
            total_count: view.total_count,
            page_start: view.page_start,
        }
    }
}
