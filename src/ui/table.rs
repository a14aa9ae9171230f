//! Grid table rendering - header sorting, filter row, rows, pager.

use eframe::egui::{self, Color32, RichText};

use crate::action::ActionDescriptor;
use crate::grid::{BadgeStyle, CellView, GridController, GridPhase};

/// What the operator did to the table this frame.
pub enum TableAction {
    /// Paging/sort/filter changed; the grid wants a fresh fetch.
    Fetch,
    /// A contextual row action was clicked.
    Run(ActionDescriptor),
}

/// Render the active grid into the central panel and report interactions.
pub fn render_grid(ctx: &egui::Context, grid: &mut GridController) -> Vec<TableAction> {
    let mut out: Vec<TableAction> = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(grid.id().title());
            if grid.phase() == GridPhase::Loading {
                ui.add(egui::Spinner::new());
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!(
                        "{} of {} records",
                        grid.records_filtered(),
                        grid.records_total()
                    ))
                    .weak(),
                );
            });
        });

        // Inline fetch error; previously rendered rows stay below it.
        if let Some(error) = grid.last_error().map(str::to_string) {
            egui::Frame::new()
                .fill(Color32::from_rgb(60, 20, 20))
                .corner_radius(4.0)
                .inner_margin(egui::Margin::symmetric(8, 4))
                .show(ui, |ui| {
                    ui.label(RichText::new(error).color(Color32::LIGHT_RED));
                });
        }
        ui.add_space(6.0);

        // Filter row. Values live on the controller and are read at
        // request-build time, so typing here affects the next fetch only.
        let mut apply_filters = false;
        ui.horizontal(|ui| {
            ui.label("Search:");
            let response = ui.add(
                egui::TextEdit::singleline(grid.search_mut()).desired_width(160.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                apply_filters = true;
            }
            for filter in grid.filters_mut() {
                ui.label(format!("{}:", filter.label));
                ui.add(egui::TextEdit::singleline(&mut filter.value).desired_width(100.0));
            }
            if ui.button("Apply").clicked() {
                apply_filters = true;
            }
        });
        ui.add_space(6.0);

        let mut sort_request: Option<usize> = None;
        let sort = grid.sort();

        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                egui::Grid::new("entity_grid")
                    .striped(true)
                    .min_col_width(90.0)
                    .show(ui, |ui| {
                        // Header row; orderable columns are buttons.
                        for (idx, col) in grid.columns().iter().enumerate() {
                            if col.orderable {
                                let marker = if sort.0 == idx {
                                    match sort.1 {
                                        crate::grid::SortDir::Asc => " ↑",
                                        crate::grid::SortDir::Desc => " ↓",
                                    }
                                } else {
                                    ""
                                };
                                if ui
                                    .button(RichText::new(format!("{}{}", col.header, marker)).strong())
                                    .clicked()
                                {
                                    sort_request = Some(idx);
                                }
                            } else {
                                ui.label(RichText::new(col.header).strong());
                            }
                        }
                        ui.label("");
                        ui.end_row();

                        for row in grid.rows() {
                            for col in grid.columns() {
                                match (col.render)(row) {
                                    CellView::Text(text) => {
                                        ui.label(text);
                                    }
                                    CellView::Badge(style, label) => {
                                        render_badge(ui, style, &label);
                                    }
                                    CellView::Empty => {
                                        ui.label("");
                                    }
                                }
                            }
                            // Contextual actions, rebuilt for the freshly
                            // rendered row set every frame.
                            ui.menu_button("Actions", |ui| {
                                for action in grid.row_actions(row) {
                                    if ui.button(action.label).clicked() {
                                        out.push(TableAction::Run(action.descriptor));
                                        ui.close_menu();
                                    }
                                }
                            });
                            ui.end_row();
                        }
                    });
            });

        if let Some(column) = sort_request {
            grid.toggle_sort(column);
            out.push(TableAction::Fetch);
        }
        if apply_filters {
            grid.set_page(0);
            out.push(TableAction::Fetch);
        }

        // Optional aggregate line supplied by the listing endpoint.
        if let Some(summary) = grid.summary().and_then(summary_line) {
            ui.add_space(4.0);
            ui.label(RichText::new(summary).weak());
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button("Prev").clicked() && grid.page() > 0 {
                grid.prev_page();
                out.push(TableAction::Fetch);
            }
            ui.label(format!("Page {} of {}", grid.page() + 1, grid.page_count()));
            if ui.button("Next").clicked() && grid.page() + 1 < grid.page_count() {
                grid.next_page();
                out.push(TableAction::Fetch);
            }
        });
    });

    out
}

fn summary_line(summary: &serde_json::Value) -> Option<String> {
    let object = summary.as_object()?;
    if object.is_empty() {
        return None;
    }
    let parts: Vec<String> = object
        .iter()
        .map(|(key, value)| match value.as_str() {
            Some(text) => format!("{key}: {text}"),
            None => format!("{key}: {value}"),
        })
        .collect();
    Some(parts.join("  |  "))
}

fn render_badge(ui: &mut egui::Ui, style: BadgeStyle, label: &str) {
    egui::Frame::new()
        .fill(style.color())
        .corner_radius(4.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(Color32::WHITE).size(11.0));
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_line_formats_pairs() {
        let summary = json!({"active": 12, "revenue": "$1,240.00"});
        let line = summary_line(&summary).unwrap();
        assert!(line.contains("active: 12"));
        assert!(line.contains("revenue: $1,240.00"));
    }

    #[test]
    fn test_summary_line_skips_empty_and_non_objects() {
        assert!(summary_line(&json!({})).is_none());
        assert!(summary_line(&json!([1, 2])).is_none());
        assert!(summary_line(&json!("text")).is_none());
    }
}
