//! Main update loop

use eframe::egui;
use std::time::Duration;

use super::MealdeskApp;
use crate::ui::{self, TableAction, TopBarAction};

impl eframe::App for MealdeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process network events
        self.process_events();

        // Drop expired toasts
        self.notifier.purge_expired();

        // Chrome panels
        if let Some(id) = ui::render_sidebar(ctx, self.state.active()) {
            self.activate(id);
        }
        if let Some(TopBarAction::Refresh) = ui::render_top_bar(ctx, self.state.active()) {
            let active = self.state.active();
            self.fetch(active);
        }

        // Active grid
        let actions = ui::render_grid(ctx, self.state.active_grid_mut());
        for action in actions {
            match action {
                TableAction::Fetch => {
                    let active = self.state.active();
                    self.fetch(active);
                }
                TableAction::Run(descriptor) => self.run_action(descriptor),
            }
        }

        // Overlays on top of everything else
        self.render_dialogs(ctx);

        // Request repaint to keep draining events while idle
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
