//! Event processing from the network thread

use super::MealdeskApp;
use crate::protocol::{ClientAction, UiEvent};
use crate::ui::ConfirmDialog;

impl MealdeskApp {
    /// Drain pending events from the network thread.
    pub(super) fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                UiEvent::ConfirmRequest { copy, reply } => {
                    // Replacing an open dialog drops its sender, which
                    // resolves the superseded action as declined.
                    self.confirm = Some(ConfirmDialog::new(copy, reply));
                }
                UiEvent::GridData { grid, page } => {
                    self.state.grid_mut(grid).apply_page(page);
                }
                UiEvent::GridFailed { grid, message } => {
                    self.state.grid_mut(grid).apply_failure(message);
                }
                UiEvent::RefreshGrid(id) => {
                    // Reload in place: same page, sort and filters.
                    let grid = self.state.grid_mut(id);
                    let endpoint = grid.endpoint().to_string();
                    let query = grid.refresh();
                    if self
                        .action_tx
                        .send(ClientAction::FetchGrid {
                            grid: id,
                            endpoint,
                            query,
                        })
                        .is_err()
                    {
                        tracing::error!("network thread is gone; cannot refresh grid");
                    }
                }
                UiEvent::ReloadScreen => self.reload_screen(),
            }
        }
    }

    /// Desktop analogue of a full page reload: every grid goes back to
    /// its defaults, the stored success message surfaces once, and the
    /// active screen refetches.
    fn reload_screen(&mut self) {
        self.state.reset_all();
        if let Some(message) = self.pending.as_ref().and_then(|p| p.take()) {
            self.notifier.notify_success(&message);
        }
        let active = self.state.active();
        self.fetch(active);
    }
}
