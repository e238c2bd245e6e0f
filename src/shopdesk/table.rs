//! # Collection View-Model
//!
//! Pure derivation of a visible table page from a raw record list:
//! filter → sort → paginate. Nothing in here mutates the underlying list or
//! touches storage; the caller owns all mutable state (see [`TableQuery`]).
//!
//! Matching rules:
//! - An empty search term passes every record.
//! - With no field filters selected, the term is matched against every
//!   searchable field (OR). Selecting filters *narrows* which fields are
//!   searched — it never adds required conditions.
//! - Text fields match as a case-insensitive substring; numeric fields match
//!   the term as a literal substring of their display form.

use std::cmp::Ordering;

/// Rows per page in both list views.
pub const DEFAULT_PAGE_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// A single field of a record, as seen by search and sort.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl FieldValue<'_> {
    fn matches(&self, term: &str, term_lower: &str) -> bool {
        match self {
            FieldValue::Text(s) => s.to_lowercase().contains(term_lower),
            FieldValue::Number(n) => n.to_string().contains(term),
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            // Heterogeneous values for the same field name cannot happen for
            // well-formed records; treat as a tie so the sort stays stable.
            _ => Ordering::Equal,
        }
    }
}

/// Named field access for records shown in a table.
pub trait TableRecord {
    /// The closed set of fields the free-text search looks at.
    fn searchable_fields() -> &'static [&'static str];

    /// Value of a named field, `None` for unknown names.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// Caller-owned query state: search term, field filters, sort, page.
///
/// Setter methods implement the page-reset contract: the page snaps back to 1
/// whenever the term or the sort changes.
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    term: String,
    filters: Vec<String>,
    sort_column: Option<String>,
    sort_direction: SortDirection,
    page: usize,
    page_size: usize,
}

impl TableQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            term: String::new(),
            filters: Vec::new(),
            sort_column: None,
            sort_direction: SortDirection::Ascending,
            page: 1,
            page_size,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn sort_column(&self) -> Option<&str> {
        self.sort_column.as_deref()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.term {
            self.term = term;
            self.page = 1;
        }
    }

    pub fn set_filters(&mut self, filters: Vec<String>) {
        self.filters = filters;
    }

    /// Selecting the current sort column flips the direction; a new column
    /// resets to ascending.
    pub fn toggle_sort(&mut self, column: &str) {
        if self.sort_column.as_deref() == Some(column) {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_column = Some(column.to_string());
            self.sort_direction = SortDirection::Ascending;
        }
        self.page = 1;
    }

    pub fn set_sort(&mut self, column: Option<String>, direction: SortDirection) {
        self.sort_column = column;
        self.sort_direction = direction;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}

impl Default for TableQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// One visible page plus pagination metadata.
#[derive(Debug)]
pub struct TableView<'a, R> {
    pub rows: Vec<&'a R>,
    pub total_count: usize,
    pub total_pages: usize,
    /// Zero-based index of the first row of this page within the
    /// filtered+sorted list.
    pub page_start: usize,
}

/// Derive the visible page for `query`. Pure: `records` is never reordered.
pub fn view<'a, R: TableRecord>(records: &'a [R], query: &TableQuery) -> TableView<'a, R> {
    let term = query.term();
    let term_lower = term.to_lowercase();

    let mut rows: Vec<&R> = records
        .iter()
        .filter(|r| record_matches(*r, term, &term_lower, query.filters()))
        .collect();

    if let Some(column) = query.sort_column() {
        let direction = query.sort_direction();
        // Vec::sort_by is stable: ties keep their prior relative order.
        rows.sort_by(|a, b| {
            let ord = compare_by(*a, *b, column);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }

    let total_count = rows.len();
    let total_pages = total_count.div_ceil(query.page_size());
    let page_start = (query.page() - 1) * query.page_size();
    let rows: Vec<&R> = rows
        .into_iter()
        .skip(page_start)
        .take(query.page_size())
        .collect();

    TableView {
        rows,
        total_count,
        total_pages,
        page_start,
    }
}

fn record_matches<R: TableRecord>(
    record: &R,
    term: &str,
    term_lower: &str,
    filters: &[String],
) -> bool {
    if term.is_empty() {
        return true;
    }

    if filters.is_empty() {
        return R::searchable_fields().iter().any(|name| {
            record
                .field(name)
                .is_some_and(|v| v.matches(term, term_lower))
        });
    }

    // Filters narrow which fields are searched; unknown names never match.
    filters.iter().any(|name| {
        record
            .field(name)
            .is_some_and(|v| v.matches(term, term_lower))
    })
}

fn compare_by<R: TableRecord>(a: &R, b: &R, column: &str) -> Ordering {
    match (a.field(column), b.field(column)) {
        (Some(va), Some(vb)) => va.compare(&vb),
        _ => Ordering::Equal,
    }
}
