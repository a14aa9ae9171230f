//! Network thread: a Tokio runtime servicing requests from the UI.
//!
//! The UI never blocks on I/O. It sends `ClientAction` values over a
//! crossbeam channel; this loop performs the HTTP work and answers with
//! `UiEvent`s. Confirmation is the one place the flow runs backwards:
//! the executor suspends on a oneshot reply that the UI fulfils when the
//! operator clicks a dialog button.

mod http;

pub use http::RestTransport;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use tokio::runtime::Runtime;
use tokio::sync::oneshot;

use crate::action::ConfirmCopy;
use crate::executor::{ActionExecutor, ConfirmPrompt, HttpCall, Transport};
use crate::grid::{GridId, GridPage, GridQuery};
use crate::notify::Notifier;
use crate::outcome::UNREACHABLE;
use crate::pending::PendingNoticeStore;
use crate::protocol::{ClientAction, UiEvent};

/// Confirmation prompt backed by the UI event channel.
pub struct ChannelConfirm {
    event_tx: Sender<UiEvent>,
}

impl ChannelConfirm {
    pub fn new(event_tx: Sender<UiEvent>) -> Self {
        Self { event_tx }
    }
}

impl ConfirmPrompt for ChannelConfirm {
    fn confirm(&self, copy: ConfirmCopy) -> impl Future<Output = bool> + Send {
        let (reply, answer) = oneshot::channel();
        let sent = self
            .event_tx
            .send(UiEvent::ConfirmRequest { copy, reply })
            .is_ok();
        async move {
            if !sent {
                // UI is gone; nothing to confirm with.
                return false;
            }
            // A dropped dialog (window closed, app exiting) is a decline.
            answer.await.unwrap_or(false)
        }
    }
}

/// Run the network loop until `Shutdown` arrives or the UI hangs up.
pub fn run_backend(
    action_rx: Receiver<ClientAction>,
    event_tx: Sender<UiEvent>,
    notifier: Arc<Notifier>,
    base_url: String,
) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!(error = %e, "could not create the network runtime");
            notifier.notify_error("Could not start the network worker.");
            return;
        }
    };

    rt.block_on(async move {
        let transport = match RestTransport::new(base_url) {
            Ok(t) => Arc::new(t),
            Err(e) => {
                tracing::error!(error = %e, "could not initialize HTTP transport");
                notifier.notify_error("Could not initialize the HTTP client.");
                return;
            }
        };
        let executor = ActionExecutor::new(
            transport.clone(),
            ChannelConfirm::new(event_tx.clone()),
            notifier.clone(),
            PendingNoticeStore::new(),
            event_tx.clone(),
        );

        loop {
            // Check for actions from the UI (non-blocking)
            loop {
                let action = match action_rx.try_recv() {
                    Ok(action) => action,
                    Err(crossbeam_channel::TryRecvError::Empty) => break,
                    // UI side dropped its sender; nothing left to serve.
                    Err(crossbeam_channel::TryRecvError::Disconnected) => return,
                };
                match action {
                    ClientAction::Execute(descriptor) => {
                        // Strictly sequential: one action settles before the
                        // next is taken up.
                        executor.execute(descriptor).await;
                    }
                    ClientAction::FetchGrid {
                        grid,
                        endpoint,
                        query,
                    } => {
                        fetch_grid(&transport, &event_tx, grid, endpoint, query).await;
                    }
                    ClientAction::Shutdown => return,
                }
            }

            tokio::time::sleep(Duration::from_millis(25)).await;
        }
    });
}

async fn fetch_grid(
    transport: &Arc<RestTransport>,
    event_tx: &Sender<UiEvent>,
    grid: GridId,
    endpoint: String,
    query: GridQuery,
) {
    let call = HttpCall::get(endpoint, query.to_params());
    let event = match transport.send(call).await {
        Ok(raw) if raw.is_2xx() => match serde_json::from_slice::<GridPage>(&raw.body) {
            Ok(page) => UiEvent::GridData { grid, page },
            Err(e) => {
                tracing::warn!(grid = grid.title(), error = %e, "unreadable listing body");
                UiEvent::GridFailed {
                    grid,
                    message: "The server returned an unreadable listing.".to_string(),
                }
            }
        },
        Ok(raw) => UiEvent::GridFailed {
            grid,
            message: format!("The server returned status {}.", raw.status),
        },
        Err(e) => {
            tracing::warn!(grid = grid.title(), error = %e, "grid fetch failed");
            UiEvent::GridFailed {
                grid,
                message: UNREACHABLE.to_string(),
            }
        }
    };
    let _ = event_tx.send(event);
}
