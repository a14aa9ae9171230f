//! Dialog and overlay rendering orchestration

use eframe::egui;

use super::MealdeskApp;
use crate::ui::{render_progress, render_status_toasts};

impl MealdeskApp {
    pub(super) fn render_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(dialog) = &mut self.confirm {
            dialog.render(ctx);
            if !dialog.is_open() {
                self.confirm = None;
            }
        }

        if let Some(modal) = self.notifier.progress() {
            render_progress(ctx, &modal);
        }

        let toasts = self.notifier.toasts();
        render_status_toasts(ctx, &toasts, self.notifier.config().anchor);
    }
}
