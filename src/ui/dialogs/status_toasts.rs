//! Status toast notifications - floating messages in a viewport corner.

use eframe::egui;

use crate::notify::{Toast, ToastAnchor, ToastKind};

/// Render floating status toasts at the configured corner.
pub fn render_status_toasts(ctx: &egui::Context, toasts: &[Toast], anchor: ToastAnchor) {
    if toasts.is_empty() {
        return;
    }

    let (align, offset) = match anchor {
        ToastAnchor::TopRight => (egui::Align2::RIGHT_TOP, [-10.0, 50.0]),
        ToastAnchor::BottomRight => (egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0]),
    };

    egui::Area::new(egui::Id::new("status_toast_area"))
        .anchor(align, offset)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(egui::Color32::from_rgba_unmultiplied(30, 30, 30, 230))
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    for toast in toasts {
                        let color = match toast.kind {
                            ToastKind::Success => egui::Color32::LIGHT_GREEN,
                            ToastKind::Error => egui::Color32::LIGHT_RED,
                        };
                        ui.label(egui::RichText::new(&toast.message).color(color));
                    }
                });
        });
}
