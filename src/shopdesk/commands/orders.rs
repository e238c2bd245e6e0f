use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use printpdf::{BuiltinFont, Mm, PdfDocument};

use super::PageInfo;
use crate::collection::Collection;
use crate::error::{Result, ShopdeskError};
use crate::model::{Order, OrderStatus};
use crate::table::{self, TableQuery};

pub const ROUTE: &str = "orders";
pub const EXPORT_FILENAME: &str = "orders.pdf";

/// Per-status totals shown on the category tabs, computed over the whole
/// list (not the current search).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub all: usize,
    pub shipping: usize,
    pub completed: usize,
    pub cancelled: usize,
}

pub fn status_counts(orders: &Collection<Order>) -> StatusCounts {
    let records = orders.records();
    let count = |status| records.iter().filter(|o| o.status == status).count();
    StatusCounts {
        all: records.len(),
        shipping: count(OrderStatus::Shipping),
        completed: count(OrderStatus::Completed),
        cancelled: count(OrderStatus::Cancelled),
    }
}

#[derive(Debug)]
pub struct OrderPage {
    pub rows: Vec<Order>,
    pub info: PageInfo,
    pub counts: StatusCounts,
}

/// The status tab narrows the list before the search filter runs; `None` is
/// the "All" tab.
pub fn list(orders: &Collection<Order>, tab: Option<OrderStatus>, query: &TableQuery) -> OrderPage {
    let counts = status_counts(orders);
    let tabbed: Vec<Order> = orders
        .records()
        .iter()
        .filter(|o| tab.is_none_or(|t| o.status == t))
        .cloned()
        .collect();

    let view = table::view(&tabbed, query);
    OrderPage {
        info: PageInfo::from_view(&view, query.page()),
        rows: view.rows.into_iter().cloned().collect(),
        counts,
    }
}

/// Write the landscape orders report (`orders.pdf`) into `dir`.
pub fn export(orders: &Collection<Order>, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(EXPORT_FILENAME);
    let bytes = render_report(orders.records())?;
    fs::write(&path, bytes)?;
    Ok(path)
}

const PAGE_WIDTH_MM: f32 = 297.0;
const PAGE_HEIGHT_MM: f32 = 210.0;
const TOP_Y_MM: f32 = 182.0;
const BOTTOM_Y_MM: f32 = 16.0;
const ROW_STEP_MM: f32 = 7.0;

/// Render the report: landscape A4, a header row per page, one row per
/// order, and a generated-at stamp in the top-right corner.
fn render_report(orders: &[Order]) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) =
        PdfDocument::new("Orders Report", Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "report");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ShopdeskError::Store(format!("pdf font: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ShopdeskError::Store(format!("pdf font: {e}")))?;

    // (label, x position in mm, max chars per cell)
    let columns = [
        ("ID", 14.0, 6),
        ("Product ID", 28.0, 10),
        ("Product Name", 56.0, 24),
        ("Color", 112.0, 12),
        ("Customer", 142.0, 20),
        ("Price ($)", 188.0, 10),
        ("Date", 212.0, 10),
        ("Payment", 240.0, 8),
        ("Status", 264.0, 10),
    ];

    let generated = format!("Generated: {}", Utc::now().format("%Y-%m-%d %H:%M UTC"));

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let draw_chrome = |layer: &printpdf::PdfLayerReference| {
        layer.use_text("Orders Report", 16.0, Mm(14.0), Mm(196.0), &bold);
        layer.use_text(generated.clone(), 9.0, Mm(232.0), Mm(200.0), &font);
        for (label, x, _) in columns {
            layer.use_text(label, 10.0, Mm(x), Mm(190.0), &bold);
        }
    };
    draw_chrome(&layer);

    let mut y = TOP_Y_MM;
    for order in orders {
        if y < BOTTOM_Y_MM {
            let (page, new_layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "report");
            layer = doc.get_page(page).get_layer(new_layer);
            draw_chrome(&layer);
            y = TOP_Y_MM;
        }

        let cells = [
            order.id.to_string(),
            order.product_id.clone(),
            order.product_name.clone(),
            order.product_color.clone(),
            order.customer_name.clone(),
            format!("{:.2}", order.price),
            order.order_date.clone(),
            order.payment_status.as_str().to_string(),
            order.status.as_str().to_string(),
        ];
        for ((_, x, max_chars), cell) in columns.iter().zip(cells) {
            layer.use_text(clip(&cell, *max_chars), 9.0, Mm(*x), Mm(y), &font);
        }
        y -= ROW_STEP_MM;
    }

    doc.save_to_bytes()
        .map_err(|e| ShopdeskError::Store(format!("pdf save: {e}")))
}

fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut clipped: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        clipped.push('…');
        clipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryBackend;
    use crate::store::StoreAdapter;
    use crate::table::SortDirection;

    fn fixture() -> Collection<Order> {
        Collection::load(&StoreAdapter::new(MemoryBackend::new()))
    }

    #[test]
    fn status_counts_add_up() {
        let orders = fixture();
        let counts = status_counts(&orders);
        assert_eq!(
            counts.all,
            counts.shipping + counts.completed + counts.cancelled
        );
    }

    #[test]
    fn tab_narrows_before_search() {
        let orders = fixture();
        let query = TableQuery::new(100);
        let page = list(&orders, Some(OrderStatus::Cancelled), &query);
        assert!(page.rows.iter().all(|o| o.status == OrderStatus::Cancelled));
        assert_eq!(page.info.total_count, page.counts.cancelled);
        // Counts still reflect the whole list.
        assert_eq!(page.counts.all, orders.len());
    }

    #[test]
    fn search_within_tab_matches_customer_name() {
        let orders = fixture();
        let mut query = TableQuery::new(100);
        query.set_term("jane");
        let page = list(&orders, Some(OrderStatus::Completed), &query);
        assert!(!page.rows.is_empty());
        assert!(page
            .rows
            .iter()
            .all(|o| o.customer_name.to_lowercase().contains("jane")));
    }

    #[test]
    fn sorting_by_price_orders_numerically() {
        let orders = fixture();
        let mut query = TableQuery::new(100);
        query.set_sort(Some("price".into()), SortDirection::Ascending);
        let page = list(&orders, None, &query);
        let prices: Vec<f64> = page.rows.iter().map(|o| o.price).collect();
        let mut sorted = prices.clone();
        sorted.sort_by(f64::total_cmp);
        assert_eq!(prices, sorted);
    }

    #[test]
    fn report_bytes_are_a_pdf() {
        let orders = fixture();
        let bytes = render_report(orders.records()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn report_handles_an_empty_list() {
        let bytes = render_report(&[]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn export_writes_the_file() {
        let orders = fixture();
        let dir = tempfile::tempdir().unwrap();
        let path = export(&orders, dir.path()).unwrap();
        assert!(path.ends_with(EXPORT_FILENAME));
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn clip_shortens_long_cells() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("a very long product name", 8), "a very …");
    }
}
