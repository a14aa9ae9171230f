//! Modal dialogs and overlays - self-contained components.
//!
//! The confirm dialog is stored as `Option<ConfirmDialog>` in the app:
//! `None` = closed, `Some` = open with its pending reply. The toast area
//! and progress overlay are stateless renderers over `Notifier` state.

mod confirm;
mod progress;
mod status_toasts;

pub use confirm::ConfirmDialog;
pub use progress::render_progress;
pub use status_toasts::render_status_toasts;
