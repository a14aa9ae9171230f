//! UI rendering modules.
//!
//! Everything here is stateless over the app model: render functions
//! take the current state, draw it, and report operator interactions
//! back as values. The app applies those after the frame's immutable
//! borrows end.

pub mod dialogs;
pub mod panels;
pub mod table;

pub use dialogs::{render_progress, render_status_toasts, ConfirmDialog};
pub use panels::{render_sidebar, render_top_bar, TopBarAction};
pub use table::{render_grid, TableAction};
