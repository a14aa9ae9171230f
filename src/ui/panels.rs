//! Chrome panels - entity sidebar and top bar.

use eframe::egui::{self, RichText};

use crate::grid::GridId;

/// Render the left entity list. Returns the screen the operator picked,
/// if any.
pub fn render_sidebar(ctx: &egui::Context, active: GridId) -> Option<GridId> {
    let mut selected = None;

    egui::SidePanel::left("entity_panel")
        .resizable(true)
        .default_width(180.0)
        .min_width(140.0)
        .show(ctx, |ui| {
            ui.add_space(12.0);
            ui.label(RichText::new("SCREENS").size(11.0).strong().weak());
            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            for id in GridId::ALL {
                if ui
                    .selectable_label(id == active, id.title())
                    .clicked()
                    && id != active
                {
                    selected = Some(id);
                }
            }
        });

    selected
}

/// Actions raised by the top bar.
pub enum TopBarAction {
    Refresh,
}

/// Render the top bar: app name, active screen, refresh button.
pub fn render_top_bar(ctx: &egui::Context, active: GridId) -> Option<TopBarAction> {
    let mut action = None;

    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Mealdesk Admin").strong());
            ui.separator();
            ui.label(active.title());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Refresh").clicked() {
                    action = Some(TopBarAction::Refresh);
                }
            });
        });
        ui.add_space(4.0);
    });

    action
}
