//! Confirmation dialog for destructive actions.
//!
//! The executor suspends on a oneshot reply; this dialog holds the
//! sender and fulfils it when the operator clicks a button. Closing the
//! window without answering drops the sender, which the executor treats
//! as a decline.

use eframe::egui;
use tokio::sync::oneshot;

use crate::action::ConfirmCopy;

/// Self-contained confirmation dialog state.
pub struct ConfirmDialog {
    copy: ConfirmCopy,
    reply: Option<oneshot::Sender<bool>>,
    open: bool,
}

impl ConfirmDialog {
    pub fn new(copy: ConfirmCopy, reply: oneshot::Sender<bool>) -> Self {
        Self {
            copy,
            reply: Some(reply),
            open: true,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    fn answer(&mut self, choice: bool) {
        if let Some(reply) = self.reply.take() {
            let _ = reply.send(choice);
        }
        self.open = false;
    }

    /// Render the dialog. The app drops it once `is_open` returns false.
    pub fn render(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        let mut still_open = true;
        let title = self.copy.title.clone();
        let text = self.copy.text.clone();
        let confirm_label = self.copy.confirm_label.clone();
        let cancel_label = self.copy.cancel_label.clone();

        egui::Window::new(title)
            .open(&mut still_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(text);
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    if ui.button(confirm_label).clicked() {
                        self.answer(true);
                    }
                    if ui.button(cancel_label).clicked() {
                        self.answer(false);
                    }
                });

                // Escape declines, like the cancel button.
                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    self.answer(false);
                }
            });

        if !still_open {
            // Window X button: no answer sent here; dropping the sender
            // below counts as a decline.
            self.answer(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_starts_open() {
        let (tx, _rx) = oneshot::channel();
        let dialog = ConfirmDialog::new(ConfirmCopy::default(), tx);
        assert!(dialog.is_open());
    }

    #[test]
    fn test_answer_resolves_reply_once() {
        let (tx, mut rx) = oneshot::channel();
        let mut dialog = ConfirmDialog::new(ConfirmCopy::default(), tx);
        dialog.answer(true);
        assert!(!dialog.is_open());
        assert_eq!(rx.try_recv(), Ok(true));

        // A second answer is a no-op.
        dialog.answer(false);
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_dropping_dialog_declines() {
        let (tx, mut rx) = oneshot::channel();
        let dialog = ConfirmDialog::new(ConfirmCopy::default(), tx);
        drop(dialog);
        // Receiver sees a closed channel, which the executor maps to false.
        assert!(rx.try_recv().is_err());
    }
}
