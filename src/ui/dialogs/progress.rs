//! Blocking progress overlay shown while a request is in flight.

use eframe::egui;

use crate::notify::ProgressModal;

pub fn render_progress(ctx: &egui::Context, modal: &ProgressModal) {
    egui::Area::new(egui::Id::new("progress_overlay"))
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_unmultiplied(30, 30, 30, 240))
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(20, 16))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.add(egui::Spinner::new());
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&modal.title).strong());
                            ui.label(&modal.text);
                        });
                    });
                });
        });
}
