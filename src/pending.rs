//! Pending-notice store - a success message that survives a screen reload.
//!
//! Actions that reload the whole screen cannot toast in place; they leave
//! their message here and the startup/reload hook shows it exactly once.
//! The slot holds at most one message and is cleared the moment it is read,
//! mirroring session-scoped browser storage.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;

const NOTICE_FILE: &str = "pending-notice";

pub struct PendingNoticeStore {
    path: PathBuf,
}

impl PendingNoticeStore {
    /// Store under the per-user cache directory.
    pub fn new() -> Option<Self> {
        let proj = ProjectDirs::from("com", "mealdesk", "mealdesk-client")?;
        let dir = proj.cache_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            tracing::warn!(error = %e, "failed to create cache dir");
            return None;
        }
        Some(Self {
            path: dir.join(NOTICE_FILE),
        })
    }

    /// Store backed by an explicit path (tests).
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Persist a message for the next screen load, replacing any previous one.
    pub fn store(&self, message: &str) -> io::Result<()> {
        fs::write(&self.path, message)
    }

    /// Read and clear the slot. Returns `None` when nothing is pending.
    pub fn take(&self) -> Option<String> {
        let message = fs::read_to_string(&self.path).ok()?;
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!(error = %e, "failed to clear pending notice");
        }
        if message.is_empty() {
            None
        } else {
            Some(message)
        }
    }
}
