//! Remote grid controller - paginated, sortable, filterable entity lists.
//!
//! Each admin screen owns one `GridController`. The controller never does
//! network I/O itself: it builds queries (reading filter values live, at
//! request time), the app ships them to the network thread, and replies
//! come back through `apply_page`/`apply_failure`. A failed fetch keeps
//! the previously rendered rows on screen.

mod badge;
mod query;

pub use badge::{days_left_badge, BadgeStyle};
pub use query::{GridPage, GridQuery, SortDir};

use crate::action::ActionDescriptor;

/// Identifies one admin entity list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridId {
    Customers,
    Subscriptions,
    FoodItems,
    Holidays,
}

impl GridId {
    pub const ALL: [GridId; 4] = [
        GridId::Customers,
        GridId::Subscriptions,
        GridId::FoodItems,
        GridId::Holidays,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            GridId::Customers => "Customers",
            GridId::Subscriptions => "Subscriptions",
            GridId::FoodItems => "Food Items",
            GridId::Holidays => "Holidays",
        }
    }

    /// Stable key used in persisted settings.
    pub fn key(&self) -> &'static str {
        match self {
            GridId::Customers => "customers",
            GridId::Subscriptions => "subscriptions",
            GridId::FoodItems => "food_items",
            GridId::Holidays => "holidays",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }
}

/// What a cell renders to.
#[derive(Debug, Clone, PartialEq)]
pub enum CellView {
    Text(String),
    Badge(BadgeStyle, String),
    Empty,
}

/// One column of a grid.
pub struct ColumnDef {
    /// Data path into the row object, also used as the server sort key.
    pub key: &'static str,
    pub header: &'static str,
    pub orderable: bool,
    pub render: fn(&serde_json::Value) -> CellView,
}

/// A named filter input whose live value is attached to every fetch.
#[derive(Debug, Clone)]
pub struct FilterInput {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl FilterInput {
    pub fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: String::new(),
        }
    }
}

/// A contextual action offered on one row.
pub struct RowAction {
    pub label: &'static str,
    pub descriptor: ActionDescriptor,
}

/// Declarative grid setup for one entity.
pub struct GridConfig {
    pub id: GridId,
    /// Listing endpoint on the admin API.
    pub endpoint: &'static str,
    pub columns: Vec<ColumnDef>,
    /// Index into `columns` plus direction.
    pub default_sort: (usize, SortDir),
    pub page_size: u64,
    pub filters: Vec<FilterInput>,
    /// Contextual actions derived from a row. Re-evaluated on every redraw,
    /// since rows are replaced wholesale on each page of data.
    pub row_actions: fn(&serde_json::Value) -> Vec<RowAction>,
}

/// Fetch lifecycle. There is no terminal state while the screen is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPhase {
    Idle,
    Loading,
    Rendered,
}

type RowsRenderedHook = Box<dyn FnMut(&[serde_json::Value])>;
type RequestFailedHook = Box<dyn FnMut(&str)>;

pub struct GridController {
    config: GridConfig,
    phase: GridPhase,
    rows: Vec<serde_json::Value>,
    records_total: u64,
    records_filtered: u64,
    summary: Option<serde_json::Value>,
    page: u64,
    sort: (usize, SortDir),
    search: String,
    draw_counter: u64,
    last_error: Option<String>,
    rows_rendered: Vec<RowsRenderedHook>,
    request_failed: Vec<RequestFailedHook>,
}

impl GridController {
    pub fn new(mut config: GridConfig) -> Self {
        // A zero page size would divide by zero in page_count; settings
        // files are hand-editable, so clamp here at the single choke point.
        config.page_size = config.page_size.max(1);
        let sort = config.default_sort;
        Self {
            config,
            phase: GridPhase::Idle,
            rows: Vec::new(),
            records_total: 0,
            records_filtered: 0,
            summary: None,
            page: 0,
            sort,
            search: String::new(),
            draw_counter: 0,
            last_error: None,
            rows_rendered: Vec::new(),
            request_failed: Vec::new(),
        }
    }

    pub fn id(&self) -> GridId {
        self.config.id
    }

    pub fn endpoint(&self) -> &'static str {
        self.config.endpoint
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.config.columns
    }

    pub fn row_actions(&self, row: &serde_json::Value) -> Vec<RowAction> {
        (self.config.row_actions)(row)
    }

    pub fn phase(&self) -> GridPhase {
        self.phase
    }

    pub fn rows(&self) -> &[serde_json::Value] {
        &self.rows
    }

    pub fn summary(&self) -> Option<&serde_json::Value> {
        self.summary.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_count(&self) -> u64 {
        if self.records_filtered == 0 {
            1
        } else {
            self.records_filtered.div_ceil(self.config.page_size)
        }
    }

    pub fn records_total(&self) -> u64 {
        self.records_total
    }

    pub fn records_filtered(&self) -> u64 {
        self.records_filtered
    }

    pub fn sort(&self) -> (usize, SortDir) {
        self.sort
    }

    pub fn search_mut(&mut self) -> &mut String {
        &mut self.search
    }

    pub fn filters(&self) -> &[FilterInput] {
        &self.config.filters
    }

    pub fn filters_mut(&mut self) -> &mut [FilterInput] {
        &mut self.config.filters
    }

    /// Subscribe to successful redraws. Fired after each accepted page,
    /// with the freshly rendered rows.
    pub fn on_rows_rendered(&mut self, hook: impl FnMut(&[serde_json::Value]) + 'static) {
        self.rows_rendered.push(Box::new(hook));
    }

    /// Subscribe to fetch failures. Fired with the error message.
    pub fn on_request_failed(&mut self, hook: impl FnMut(&str) + 'static) {
        self.request_failed.push(Box::new(hook));
    }

    /// Enter the Loading phase and build the outgoing query. Filter values
    /// are read here, not at init time, so operator edits always apply.
    pub fn begin_fetch(&mut self) -> GridQuery {
        self.phase = GridPhase::Loading;
        self.draw_counter += 1;
        GridQuery {
            draw: self.draw_counter,
            start: self.page * self.config.page_size,
            length: self.config.page_size,
            order_col: self.config.columns[self.sort.0].key.to_string(),
            order_dir: self.sort.1,
            search: self.search.clone(),
            filters: self
                .config
                .filters
                .iter()
                .map(|f| (f.name.to_string(), f.value.clone()))
                .collect(),
        }
    }

    /// Re-issue the current query without resetting page/sort/filters.
    /// Used after a successful action on one of this grid's rows.
    pub fn refresh(&mut self) -> GridQuery {
        self.begin_fetch()
    }

    /// Accept a page of rows. Replies to superseded draws are discarded so
    /// a slow response cannot overwrite a newer one.
    pub fn apply_page(&mut self, page: GridPage) {
        if page.draw != 0 && page.draw != self.draw_counter {
            tracing::debug!(
                grid = self.config.id.title(),
                got = page.draw,
                want = self.draw_counter,
                "discarding stale grid reply"
            );
            return;
        }
        self.rows = page.rows;
        self.records_total = page.records_total;
        self.records_filtered = page.records_filtered;
        self.summary = page.summary;
        self.phase = GridPhase::Rendered;
        self.last_error = None;

        // Clamp in case a shrinking result set left us past the end.
        let last = self.page_count().saturating_sub(1);
        if self.page > last {
            self.page = last;
        }

        let rows = std::mem::take(&mut self.rows);
        for hook in &mut self.rows_rendered {
            hook(&rows);
        }
        self.rows = rows;
    }

    /// Record a failed fetch. Previously rendered rows stay visible; the
    /// message is surfaced inline instead of blanking the grid.
    pub fn apply_failure(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.phase = GridPhase::Rendered;
        self.last_error = Some(message.clone());
        for hook in &mut self.request_failed {
            hook(&message);
        }
    }

    /// Toggle sort on a column: same column flips direction, a new column
    /// starts ascending. Paging resets to the first page.
    pub fn toggle_sort(&mut self, column: usize) {
        if column >= self.config.columns.len() || !self.config.columns[column].orderable {
            return;
        }
        if self.sort.0 == column {
            self.sort.1 = self.sort.1.toggled();
        } else {
            self.sort = (column, SortDir::Asc);
        }
        self.page = 0;
    }

    pub fn set_page(&mut self, page: u64) {
        self.page = page.min(self.page_count().saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Reset paging and search for a full screen reload.
    pub fn reset(&mut self) {
        self.page = 0;
        self.search.clear();
        for f in &mut self.config.filters {
            f.value.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    fn test_config() -> GridConfig {
        GridConfig {
            id: GridId::Customers,
            endpoint: "/admin/customers/list",
            columns: vec![
                ColumnDef {
                    key: "name",
                    header: "Name",
                    orderable: true,
                    render: |row| {
                        CellView::Text(row["name"].as_str().unwrap_or("-").to_string())
                    },
                },
                ColumnDef {
                    key: "status",
                    header: "Status",
                    orderable: false,
                    render: |row| {
                        CellView::Badge(
                            BadgeStyle::from_status(row["status"].as_str().unwrap_or("")),
                            row["status"].as_str().unwrap_or("?").to_string(),
                        )
                    },
                },
            ],
            default_sort: (0, SortDir::Asc),
            page_size: 10,
            filters: vec![FilterInput::new("status", "Status")],
            row_actions: |_| Vec::new(),
        }
    }

    fn page(draw: u64, rows: Vec<serde_json::Value>, filtered: u64) -> GridPage {
        GridPage {
            draw,
            rows,
            records_total: filtered,
            records_filtered: filtered,
            summary: None,
        }
    }

    #[test]
    fn test_phase_machine() {
        let mut grid = GridController::new(test_config());
        assert_eq!(grid.phase(), GridPhase::Idle);

        let q = grid.begin_fetch();
        assert_eq!(grid.phase(), GridPhase::Loading);
        assert_eq!(q.draw, 1);
        assert_eq!(q.order_col, "name");

        grid.apply_page(page(1, vec![json!({"name": "Ada"})], 1));
        assert_eq!(grid.phase(), GridPhase::Rendered);
        assert_eq!(grid.rows().len(), 1);

        // Next fetch goes straight back to Loading.
        grid.begin_fetch();
        assert_eq!(grid.phase(), GridPhase::Loading);
    }

    #[test]
    fn test_filters_read_at_fetch_time() {
        let mut grid = GridController::new(test_config());
        let q = grid.begin_fetch();
        assert!(q.to_params().iter().all(|(k, _)| k != "status"));

        grid.filters_mut()[0].value = "active".to_string();
        let q = grid.begin_fetch();
        assert!(q
            .to_params()
            .contains(&("status".to_string(), "active".to_string())));
    }

    #[test]
    fn test_stale_draw_discarded() {
        let mut grid = GridController::new(test_config());
        grid.begin_fetch(); // draw 1
        grid.begin_fetch(); // draw 2 supersedes it

        grid.apply_page(page(1, vec![json!({"name": "old"})], 1));
        assert_eq!(grid.phase(), GridPhase::Loading);
        assert!(grid.rows().is_empty());

        grid.apply_page(page(2, vec![json!({"name": "new"})], 1));
        assert_eq!(grid.rows()[0]["name"], "new");
    }

    #[test]
    fn test_failure_keeps_previous_rows() {
        let mut grid = GridController::new(test_config());
        grid.begin_fetch();
        grid.apply_page(page(1, vec![json!({"name": "Ada"})], 1));

        grid.begin_fetch();
        grid.apply_failure("server unreachable");
        assert_eq!(grid.rows().len(), 1);
        assert_eq!(grid.last_error(), Some("server unreachable"));

        // A later success clears the inline error.
        grid.begin_fetch();
        grid.apply_page(page(3, vec![json!({"name": "Ada"})], 1));
        assert!(grid.last_error().is_none());
    }

    #[test]
    fn test_toggle_sort() {
        let mut grid = GridController::new(test_config());
        grid.set_page(0);
        grid.toggle_sort(0);
        assert_eq!(grid.sort(), (0, SortDir::Desc));
        grid.toggle_sort(0);
        assert_eq!(grid.sort(), (0, SortDir::Asc));

        // Non-orderable column is ignored.
        grid.toggle_sort(1);
        assert_eq!(grid.sort(), (0, SortDir::Asc));

        // Out-of-range column is ignored.
        grid.toggle_sort(99);
        assert_eq!(grid.sort(), (0, SortDir::Asc));
    }

    #[test]
    fn test_refresh_preserves_page_and_sort() {
        let mut grid = GridController::new(test_config());
        grid.begin_fetch();
        grid.apply_page(page(1, vec![json!({})], 35));
        grid.set_page(2);
        grid.toggle_sort(0); // resets page, so re-set it
        grid.set_page(2);

        let q = grid.refresh();
        assert_eq!(q.start, 20);
        assert_eq!(q.order_dir, SortDir::Desc);
    }

    #[test]
    fn test_paging_clamps_to_page_count() {
        let mut grid = GridController::new(test_config());
        grid.begin_fetch();
        grid.apply_page(page(1, vec![json!({})], 25)); // 3 pages of 10

        grid.set_page(99);
        assert_eq!(grid.page(), 2);
        grid.next_page();
        assert_eq!(grid.page(), 2);
        grid.prev_page();
        assert_eq!(grid.page(), 1);
        grid.prev_page();
        grid.prev_page();
        assert_eq!(grid.page(), 0);
    }

    #[test]
    fn test_event_subscriptions() {
        let mut grid = GridController::new(test_config());
        let rendered = Rc::new(Cell::new(0usize));
        let failed = Rc::new(Cell::new(0usize));

        let r = rendered.clone();
        grid.on_rows_rendered(move |rows| {
            r.set(r.get() + rows.len());
        });
        let f = failed.clone();
        grid.on_request_failed(move |_| {
            f.set(f.get() + 1);
        });

        grid.begin_fetch();
        grid.apply_page(page(1, vec![json!({}), json!({})], 2));
        assert_eq!(rendered.get(), 2);
        assert_eq!(failed.get(), 0);

        grid.begin_fetch();
        grid.apply_failure("boom");
        assert_eq!(failed.get(), 1);
    }

    #[test]
    fn test_zero_page_size_clamped_to_one() {
        let mut config = test_config();
        config.page_size = 0;
        let mut grid = GridController::new(config);

        let q = grid.begin_fetch();
        assert_eq!(q.length, 1);

        grid.apply_page(page(1, vec![json!({"name": "Ada"})], 1));
        assert_eq!(grid.page_count(), 1);
        assert_eq!(grid.page(), 0);
    }

    #[test]
    fn test_reset_clears_paging_and_filters() {
        let mut grid = GridController::new(test_config());
        grid.begin_fetch();
        grid.apply_page(page(1, vec![json!({})], 50));
        grid.set_page(3);
        grid.filters_mut()[0].value = "active".to_string();
        *grid.search_mut() = "ada".to_string();

        grid.reset();
        assert_eq!(grid.page(), 0);
        assert!(grid.filters()[0].value.is_empty());
        let q = grid.begin_fetch();
        assert!(q.search.is_empty());
    }
}
