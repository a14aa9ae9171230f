//! Alert/toast adapter - uniform success/error/progress vocabulary.
//!
//! The `Notifier` is created once at startup with explicit options and
//! shared as an `Arc` handle between the UI thread (which renders its
//! state every frame) and the network thread (which pushes into it).
//! With no UI attached (headless runs, tests) every operation degrades
//! to the diagnostic log instead of failing, so callers never branch on
//! adapter availability.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Corner of the viewport where toasts are anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastAnchor {
    #[default]
    TopRight,
    BottomRight,
}

/// Process-wide notifier options, fixed at startup.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    pub anchor: ToastAnchor,
    /// How long a toast stays visible.
    pub toast_ttl: Duration,
    /// Collapse a toast identical to the newest visible one instead of
    /// stacking duplicates.
    pub dedup: bool,
    pub max_visible: usize,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            anchor: ToastAnchor::TopRight,
            toast_ttl: Duration::from_secs(4),
            dedup: true,
            max_visible: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created: Instant,
}

/// Blocking progress overlay shown while a request is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressModal {
    pub title: String,
    pub text: String,
}

#[derive(Default)]
struct NotifierState {
    toasts: Vec<Toast>,
    progress: Option<ProgressModal>,
}

pub struct Notifier {
    config: NotifierConfig,
    state: Mutex<NotifierState>,
    ui_attached: AtomicBool,
}

impl Notifier {
    pub fn new(config: NotifierConfig) -> Self {
        Self {
            config,
            state: Mutex::new(NotifierState::default()),
            ui_attached: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    /// Mark that a UI is consuming this notifier's state. Called once by
    /// the app when it starts rendering.
    pub fn attach_ui(&self) {
        self.ui_attached.store(true, Ordering::Relaxed);
    }

    pub fn notify_success(&self, message: &str) {
        tracing::info!(toast = message, "action succeeded");
        self.push_toast(ToastKind::Success, message);
    }

    pub fn notify_error(&self, message: &str) {
        tracing::warn!(toast = message, "action failed");
        self.push_toast(ToastKind::Error, message);
    }

    pub fn progress_open(&self, title: &str, text: &str) {
        tracing::debug!(title, "progress open");
        if !self.ui_attached.load(Ordering::Relaxed) {
            return;
        }
        self.lock().progress = Some(ProgressModal {
            title: title.to_string(),
            text: text.to_string(),
        });
    }

    pub fn progress_close(&self) {
        tracing::debug!("progress close");
        self.lock().progress = None;
    }

    /// Snapshot of the current progress overlay, if any.
    pub fn progress(&self) -> Option<ProgressModal> {
        self.lock().progress.clone()
    }

    /// Snapshot of the visible toasts, newest last.
    pub fn toasts(&self) -> Vec<Toast> {
        self.lock().toasts.clone()
    }

    /// Drop toasts older than the configured time-to-live. Called once per
    /// UI frame.
    pub fn purge_expired(&self) {
        let ttl = self.config.toast_ttl;
        self.lock().toasts.retain(|t| t.created.elapsed() < ttl);
    }

    fn push_toast(&self, kind: ToastKind, message: &str) {
        if !self.ui_attached.load(Ordering::Relaxed) {
            // Headless: the tracing line above is the whole notification.
            return;
        }
        let mut state = self.lock();
        if self.config.dedup {
            if let Some(last) = state.toasts.last_mut() {
                if last.kind == kind && last.message == message {
                    last.created = Instant::now();
                    return;
                }
            }
        }
        state.toasts.push(Toast {
            kind,
            message: message.to_string(),
            created: Instant::now(),
        });
        let max = self.config.max_visible;
        if state.toasts.len() > max {
            let excess = state.toasts.len() - max;
            state.toasts.drain(..excess);
        }
    }

    fn lock(&self) -> MutexGuard<'_, NotifierState> {
        // A poisoned lock only means a UI frame panicked mid-push; the
        // queue itself is still usable.
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(NotifierConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached() -> Notifier {
        let n = Notifier::default();
        n.attach_ui();
        n
    }

    #[test]
    fn test_headless_operations_never_fail() {
        let n = Notifier::default();
        n.notify_success("saved");
        n.notify_error("broken");
        n.progress_open("Working", "Contacting the server");
        n.progress_close();
        assert!(n.toasts().is_empty());
        assert!(n.progress().is_none());
    }

    #[test]
    fn test_toasts_queue_when_ui_attached() {
        let n = attached();
        n.notify_success("Customer activated");
        n.notify_error("Delete failed");
        let toasts = n.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[1].kind, ToastKind::Error);
    }

    #[test]
    fn test_dedup_collapses_consecutive_identical_toasts() {
        let n = attached();
        n.notify_success("Saved");
        n.notify_success("Saved");
        assert_eq!(n.toasts().len(), 1);

        // A different message still stacks.
        n.notify_success("Deleted");
        assert_eq!(n.toasts().len(), 2);
    }

    #[test]
    fn test_max_visible_drops_oldest() {
        let n = Notifier::new(NotifierConfig {
            dedup: false,
            max_visible: 2,
            ..NotifierConfig::default()
        });
        n.attach_ui();
        n.notify_success("one");
        n.notify_success("two");
        n.notify_success("three");
        let toasts = n.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].message, "two");
        assert_eq!(toasts[1].message, "three");
    }

    #[test]
    fn test_progress_open_close() {
        let n = attached();
        n.progress_open("Deleting", "Contacting the server...");
        let modal = n.progress().expect("progress should be open");
        assert_eq!(modal.title, "Deleting");
        n.progress_close();
        assert!(n.progress().is_none());
    }

    #[test]
    fn test_purge_expired() {
        let n = Notifier::new(NotifierConfig {
            toast_ttl: Duration::from_millis(0),
            ..NotifierConfig::default()
        });
        n.attach_ui();
        n.notify_success("gone immediately");
        n.purge_expired();
        assert!(n.toasts().is_empty());
    }
}
