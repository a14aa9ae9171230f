//! Channel protocol between the UI and the network thread.

use tokio::sync::oneshot;

use crate::action::{ActionDescriptor, ConfirmCopy};
use crate::grid::{GridId, GridPage, GridQuery};

/// Actions sent from the UI to the network thread.
#[derive(Debug)]
pub enum ClientAction {
    /// Run one confirm-mutate-refresh action end to end.
    Execute(ActionDescriptor),
    /// Fetch a page of rows for a grid from its listing endpoint.
    FetchGrid {
        grid: GridId,
        endpoint: String,
        query: GridQuery,
    },
    /// Stop the network loop.
    Shutdown,
}

/// Events sent from the network thread to the UI.
#[derive(Debug)]
pub enum UiEvent {
    /// The executor needs a user decision; reply over the oneshot channel.
    /// Dropping the sender counts as a decline.
    ConfirmRequest {
        copy: ConfirmCopy,
        reply: oneshot::Sender<bool>,
    },
    /// A page of rows arrived for a grid.
    GridData { grid: GridId, page: GridPage },
    /// A grid fetch failed; the message is shown inline.
    GridFailed { grid: GridId, message: String },
    /// A successful action asks for this grid to reload in place.
    RefreshGrid(GridId),
    /// A successful action asks for a full screen reload; the success
    /// message is waiting in the pending-notice store.
    ReloadScreen,
}
