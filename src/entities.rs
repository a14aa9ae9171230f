//! Per-entity grid configurations for the admin screens.
//!
//! Each function wires one entity list: its columns, default sort,
//! filters, and the contextual row actions that feed the executor. Rows
//! arrive as loose JSON from the listing endpoints, so every render
//! helper tolerates missing or oddly typed fields.

use chrono::{Local, NaiveDate};
use serde_json::{json, Value};

use crate::action::{ActionDescriptor, NotifyMode};
use crate::grid::{
    days_left_badge, BadgeStyle, CellView, ColumnDef, FilterInput, GridConfig, GridId, RowAction,
    SortDir,
};

/// Build the configuration for one admin screen.
pub fn grid_config(id: GridId, page_size: u64) -> GridConfig {
    match id {
        GridId::Customers => customers_grid(page_size),
        GridId::Subscriptions => subscriptions_grid(page_size),
        GridId::FoodItems => food_items_grid(page_size),
        GridId::Holidays => holidays_grid(page_size),
    }
}

// ---------------------------------------------------------------------------
// Render helpers
// ---------------------------------------------------------------------------

fn text(row: &Value, key: &str) -> CellView {
    match row.get(key) {
        Some(Value::String(s)) if !s.is_empty() => CellView::Text(s.clone()),
        Some(Value::Number(n)) => CellView::Text(n.to_string()),
        _ => CellView::Text("-".to_string()),
    }
}

fn status_cell(row: &Value, key: &str) -> CellView {
    match row.get(key).and_then(Value::as_str) {
        Some(status) => CellView::Badge(BadgeStyle::from_status(status), status.to_string()),
        None => CellView::Badge(BadgeStyle::Secondary, "unknown".to_string()),
    }
}

fn bool_cell(row: &Value, key: &str, on: &str, off: &str) -> CellView {
    match row.get(key).and_then(Value::as_bool) {
        Some(true) => CellView::Badge(BadgeStyle::Success, on.to_string()),
        Some(false) => CellView::Badge(BadgeStyle::Danger, off.to_string()),
        None => CellView::Badge(BadgeStyle::Secondary, "unknown".to_string()),
    }
}

fn price_cell(row: &Value, key: &str) -> CellView {
    match row.get(key).and_then(Value::as_f64) {
        Some(p) => CellView::Text(format!("{:.2}", p)),
        None => CellView::Text("-".to_string()),
    }
}

fn parse_date(row: &Value, key: &str) -> Option<NaiveDate> {
    row.get(key)
        .and_then(Value::as_str)
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

fn days_left_cell(row: &Value, key: &str) -> CellView {
    match parse_date(row, key) {
        Some(end) => {
            let (style, label) = days_left_badge(end, Local::now().date_naive());
            CellView::Badge(style, label)
        }
        None => CellView::Badge(BadgeStyle::Secondary, "no end date".to_string()),
    }
}

fn row_id(row: &Value) -> Option<i64> {
    row.get("id").and_then(Value::as_i64)
}

fn is_active(row: &Value) -> bool {
    row.get("status").and_then(Value::as_str) == Some("active")
}

// ---------------------------------------------------------------------------
// Customers
// ---------------------------------------------------------------------------

fn customers_grid(page_size: u64) -> GridConfig {
    GridConfig {
        id: GridId::Customers,
        endpoint: "/admin/customers/list",
        columns: vec![
            ColumnDef {
                key: "name",
                header: "Name",
                orderable: true,
                render: |row| text(row, "name"),
            },
            ColumnDef {
                key: "email",
                header: "Email",
                orderable: true,
                render: |row| text(row, "email"),
            },
            ColumnDef {
                key: "phone",
                header: "Phone",
                orderable: false,
                render: |row| text(row, "phone"),
            },
            ColumnDef {
                key: "status",
                header: "Status",
                orderable: true,
                render: |row| status_cell(row, "status"),
            },
        ],
        default_sort: (0, SortDir::Asc),
        page_size,
        filters: vec![FilterInput::new("status", "Status")],
        row_actions: customer_actions,
    }
}

fn customer_actions(row: &Value) -> Vec<RowAction> {
    let Some(id) = row_id(row) else {
        return Vec::new();
    };
    let (label, next_status, prompt) = if is_active(row) {
        (
            "Deactivate",
            "inactive",
            "The customer will no longer be able to place orders.",
        )
    } else {
        ("Activate", "active", "The customer regains full access.")
    };
    vec![
        RowAction {
            label,
            descriptor: ActionDescriptor::new(format!("/admin/customers/{}/status", id))
                .payload(json!({ "status": next_status }))
                .confirm_title("Change customer status?")
                .confirm_text(prompt)
                .refresh_target(GridId::Customers),
        },
        RowAction {
            label: "Delete",
            descriptor: ActionDescriptor::delete(format!("/admin/customers/{}", id))
                .confirm_title("Delete customer?")
                .confirm_text("This removes the customer and their saved addresses.")
                .confirm_labels("Yes, delete", "Keep customer")
                .refresh_target(GridId::Customers),
        },
    ]
}

// ---------------------------------------------------------------------------
// Subscriptions
// ---------------------------------------------------------------------------

fn subscriptions_grid(page_size: u64) -> GridConfig {
    GridConfig {
        id: GridId::Subscriptions,
        endpoint: "/admin/subscriptions/list",
        columns: vec![
            ColumnDef {
                key: "customer_name",
                header: "Customer",
                orderable: true,
                render: |row| text(row, "customer_name"),
            },
            ColumnDef {
                key: "plan_name",
                header: "Plan",
                orderable: true,
                render: |row| text(row, "plan_name"),
            },
            ColumnDef {
                key: "start_date",
                header: "Started",
                orderable: true,
                render: |row| text(row, "start_date"),
            },
            ColumnDef {
                key: "end_date",
                header: "Days Left",
                orderable: true,
                render: |row| days_left_cell(row, "end_date"),
            },
            ColumnDef {
                key: "status",
                header: "Status",
                orderable: true,
                render: |row| status_cell(row, "status"),
            },
        ],
        default_sort: (3, SortDir::Asc),
        page_size,
        filters: vec![
            FilterInput::new("status", "Status"),
            FilterInput::new("plan", "Plan"),
        ],
        row_actions: subscription_actions,
    }
}

fn subscription_actions(row: &Value) -> Vec<RowAction> {
    let Some(id) = row_id(row) else {
        return Vec::new();
    };
    let mut actions = Vec::new();
    let status = row.get("status").and_then(Value::as_str).unwrap_or("");
    if status == "active" || status == "paused" {
        // Cancelling shifts the summary counters, so the whole screen
        // reloads and the message is shown by the reload hook.
        actions.push(RowAction {
            label: "Cancel",
            descriptor: ActionDescriptor::new(format!("/admin/subscriptions/{}/cancel", id))
                .confirm_title("Cancel subscription?")
                .confirm_text("The customer keeps deliveries until the end of the paid period.")
                .confirm_labels("Yes, cancel it", "Keep it")
                .notify_mode(NotifyMode::ReloadWithStoredMessage),
        });
    }
    if status == "active" {
        actions.push(RowAction {
            label: "Pause",
            descriptor: ActionDescriptor::new(format!("/admin/subscriptions/{}/status", id))
                .payload(json!({ "status": "paused" }))
                .confirm_title("Pause subscription?")
                .confirm_text("Deliveries stop until the subscription is resumed.")
                .refresh_target(GridId::Subscriptions),
        });
    } else if status == "paused" {
        actions.push(RowAction {
            label: "Resume",
            descriptor: ActionDescriptor::new(format!("/admin/subscriptions/{}/status", id))
                .payload(json!({ "status": "active" }))
                .confirm_title("Resume subscription?")
                .confirm_text("Deliveries start again from the next cycle.")
                .refresh_target(GridId::Subscriptions),
        });
    }
    actions
}

// ---------------------------------------------------------------------------
// Food items
// ---------------------------------------------------------------------------

fn food_items_grid(page_size: u64) -> GridConfig {
    GridConfig {
        id: GridId::FoodItems,
        endpoint: "/admin/food-items/list",
        columns: vec![
            ColumnDef {
                key: "name",
                header: "Item",
                orderable: true,
                render: |row| text(row, "name"),
            },
            ColumnDef {
                key: "category_name",
                header: "Category",
                orderable: true,
                render: |row| text(row, "category_name"),
            },
            ColumnDef {
                key: "price",
                header: "Price",
                orderable: true,
                render: |row| price_cell(row, "price"),
            },
            ColumnDef {
                key: "available",
                header: "Availability",
                orderable: false,
                render: |row| bool_cell(row, "available", "available", "sold out"),
            },
        ],
        default_sort: (0, SortDir::Asc),
        page_size,
        filters: vec![FilterInput::new("category", "Category")],
        row_actions: food_item_actions,
    }
}

fn food_item_actions(row: &Value) -> Vec<RowAction> {
    let Some(id) = row_id(row) else {
        return Vec::new();
    };
    let available = row.get("available").and_then(Value::as_bool).unwrap_or(false);
    vec![
        RowAction {
            label: if available { "Mark sold out" } else { "Mark available" },
            descriptor: ActionDescriptor::new(format!("/admin/food-items/{}/availability", id))
                .payload(json!({ "available": !available }))
                .confirm_title("Change availability?")
                .confirm_text("The menu updates for customers immediately.")
                .refresh_target(GridId::FoodItems),
        },
        RowAction {
            label: "Delete",
            descriptor: ActionDescriptor::delete(format!("/admin/food-items/{}", id))
                .confirm_title("Delete food item?")
                .confirm_text("Existing orders that include it are not affected.")
                .confirm_labels("Yes, delete", "Keep item")
                .refresh_target(GridId::FoodItems),
        },
    ]
}

// ---------------------------------------------------------------------------
// Holidays
// ---------------------------------------------------------------------------

fn holidays_grid(page_size: u64) -> GridConfig {
    GridConfig {
        id: GridId::Holidays,
        endpoint: "/admin/holidays/list",
        columns: vec![
            ColumnDef {
                key: "date",
                header: "Date",
                orderable: true,
                render: |row| text(row, "date"),
            },
            ColumnDef {
                key: "name",
                header: "Holiday",
                orderable: true,
                render: |row| text(row, "name"),
            },
            ColumnDef {
                key: "enabled",
                header: "Deliveries",
                orderable: false,
                render: |row| bool_cell(row, "enabled", "suspended", "running"),
            },
        ],
        default_sort: (0, SortDir::Desc),
        page_size,
        filters: vec![FilterInput::new("year", "Year")],
        row_actions: holiday_actions,
    }
}

fn holiday_actions(row: &Value) -> Vec<RowAction> {
    let Some(id) = row_id(row) else {
        return Vec::new();
    };
    vec![RowAction {
        label: "Delete",
        descriptor: ActionDescriptor::delete(format!("/admin/holidays/{}", id))
            .confirm_title("Delete holiday?")
            .confirm_text("Deliveries will run on this date again.")
            .confirm_labels("Yes, delete", "Keep holiday")
            .refresh_target(GridId::Holidays),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::HttpMethod;

    #[test]
    fn test_every_screen_has_a_config() {
        for id in GridId::ALL {
            let config = grid_config(id, 20);
            assert_eq!(config.id, id);
            assert!(!config.columns.is_empty());
            assert!(config.default_sort.0 < config.columns.len());
            assert!(config.endpoint.starts_with("/admin/"));
        }
    }

    #[test]
    fn test_text_cell_tolerates_missing_fields() {
        let row = json!({"name": "Dal Bhat"});
        assert_eq!(text(&row, "name"), CellView::Text("Dal Bhat".to_string()));
        assert_eq!(text(&row, "email"), CellView::Text("-".to_string()));
        assert_eq!(text(&json!({"id": 7}), "id"), CellView::Text("7".to_string()));
    }

    #[test]
    fn test_status_cell_unknown_value_renders_secondary() {
        let cell = status_cell(&json!({"status": "mystery"}), "status");
        assert_eq!(cell, CellView::Badge(BadgeStyle::Secondary, "mystery".to_string()));
        let cell = status_cell(&json!({}), "status");
        assert_eq!(cell, CellView::Badge(BadgeStyle::Secondary, "unknown".to_string()));
    }

    #[test]
    fn test_customer_toggle_direction_follows_status() {
        let active = &customer_actions(&json!({"id": 4, "status": "active"}))[0];
        assert_eq!(active.label, "Deactivate");
        assert_eq!(active.descriptor.payload, Some(json!({"status": "inactive"})));
        assert_eq!(active.descriptor.method, HttpMethod::Post);
        assert_eq!(active.descriptor.endpoint, "/admin/customers/4/status");

        let inactive = &customer_actions(&json!({"id": 4, "status": "inactive"}))[0];
        assert_eq!(inactive.label, "Activate");
        assert_eq!(inactive.descriptor.payload, Some(json!({"status": "active"})));
    }

    #[test]
    fn test_rows_without_id_offer_no_actions() {
        assert!(customer_actions(&json!({"status": "active"})).is_empty());
        assert!(subscription_actions(&json!({})).is_empty());
        assert!(food_item_actions(&json!({"name": "x"})).is_empty());
        assert!(holiday_actions(&json!({})).is_empty());
    }

    #[test]
    fn test_cancel_uses_reload_mode() {
        let actions = subscription_actions(&json!({"id": 9, "status": "active"}));
        let cancel = actions.iter().find(|a| a.label == "Cancel").unwrap();
        assert_eq!(cancel.descriptor.notify_mode, NotifyMode::ReloadWithStoredMessage);
        assert_eq!(cancel.descriptor.endpoint, "/admin/subscriptions/9/cancel");

        // Cancelled subscriptions offer nothing further.
        assert!(subscription_actions(&json!({"id": 9, "status": "cancelled"})).is_empty());
    }

    #[test]
    fn test_pause_resume_pairing() {
        let active = subscription_actions(&json!({"id": 1, "status": "active"}));
        assert!(active.iter().any(|a| a.label == "Pause"));
        let paused = subscription_actions(&json!({"id": 1, "status": "paused"}));
        assert!(paused.iter().any(|a| a.label == "Resume"));
    }

    #[test]
    fn test_delete_descriptors_are_delete_verb_without_payload() {
        let del = &customer_actions(&json!({"id": 2, "status": "active"}))[1];
        assert_eq!(del.descriptor.method, HttpMethod::Delete);
        assert!(del.descriptor.payload.is_none());
        assert!(del.descriptor.validate().is_ok());
    }

    #[test]
    fn test_days_left_cell_handles_bad_dates() {
        let cell = days_left_cell(&json!({"end_date": "not-a-date"}), "end_date");
        assert_eq!(cell, CellView::Badge(BadgeStyle::Secondary, "no end date".to_string()));
        let cell = days_left_cell(&json!({"end_date": "2020-01-01"}), "end_date");
        assert_eq!(cell, CellView::Badge(BadgeStyle::Danger, "Expired".to_string()));
    }
}
