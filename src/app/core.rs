//! Core MealdeskApp struct definition and initialization

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::action::ActionDescriptor;
use crate::backend::run_backend;
use crate::config::{load_settings, save_settings, Settings};
use crate::grid::GridId;
use crate::notify::Notifier;
use crate::pending::PendingNoticeStore;
use crate::protocol::{ClientAction, UiEvent};
use crate::state::AdminState;
use crate::ui::ConfirmDialog;

pub struct MealdeskApp {
    // Grid controllers for every screen plus the active selection
    pub state: AdminState,

    pub settings: Settings,

    // Shared with the network thread; it raises toasts and the
    // progress overlay, the UI renders them.
    pub notifier: Arc<Notifier>,

    // Channels for network thread communication
    pub action_tx: Sender<ClientAction>,
    pub event_rx: Receiver<UiEvent>,

    // Confirmation dialog; `None` = closed
    pub confirm: Option<ConfirmDialog>,

    // Success message handoff across a screen reload
    pub pending: Option<PendingNoticeStore>,
}

impl MealdeskApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_settings().unwrap_or_default();

        let notifier = Arc::new(Notifier::new(settings.notifier_config()));
        notifier.attach_ui();

        // Create channels for UI <-> network thread
        let (action_tx, action_rx) = unbounded::<ClientAction>();
        let (event_tx, event_rx) = unbounded::<UiEvent>();

        {
            let notifier = notifier.clone();
            let base_url = settings.base_url.clone();
            thread::spawn(move || {
                run_backend(action_rx, event_tx, notifier, base_url);
            });
        }

        let mut state = AdminState::new(settings.page_size);
        if let Some(id) = settings
            .active_screen
            .as_deref()
            .and_then(GridId::from_key)
        {
            state.set_active(id);
        }

        let mut app = Self {
            state,
            settings,
            notifier,
            action_tx,
            event_rx,
            confirm: None,
            pending: PendingNoticeStore::new(),
        };

        // A success message stored before the last reload surfaces now,
        // exactly once.
        if let Some(message) = app.pending.as_ref().and_then(|p| p.take()) {
            app.notifier.notify_success(&message);
        }

        let active = app.state.active();
        app.fetch(active);
        app
    }

    /// Kick off a fetch for one grid using its current query state.
    pub fn fetch(&mut self, id: GridId) {
        let grid = self.state.grid_mut(id);
        let endpoint = grid.endpoint().to_string();
        let query = grid.begin_fetch();
        if self
            .action_tx
            .send(ClientAction::FetchGrid {
                grid: id,
                endpoint,
                query,
            })
            .is_err()
        {
            tracing::error!("network thread is gone; cannot fetch grid");
        }
    }

    /// Hand an action to the network thread for the full
    /// confirm-mutate-refresh flow.
    pub fn run_action(&self, descriptor: ActionDescriptor) {
        if self
            .action_tx
            .send(ClientAction::Execute(descriptor))
            .is_err()
        {
            tracing::error!("network thread is gone; cannot run action");
        }
    }

    /// Switch screens and load the new grid if it has nothing rendered.
    pub fn activate(&mut self, id: GridId) {
        self.state.set_active(id);
        if self.state.grid(id).rows().is_empty() {
            self.fetch(id);
        }
    }
}

impl Drop for MealdeskApp {
    fn drop(&mut self) {
        self.settings.active_screen = Some(self.state.active().key().to_string());
        if let Err(e) = save_settings(&self.settings) {
            tracing::warn!(error = %e, "failed to save settings");
        }
        let _ = self.action_tx.send(ClientAction::Shutdown);
    }
}
