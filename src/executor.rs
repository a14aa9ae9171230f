//! Action executor - the confirm-mutate-refresh sequence.
//!
//! `execute` runs one descriptor end to end: confirm with the operator,
//! give the caller a last veto, issue the request under a blocking
//! progress overlay, normalize whatever comes back, notify, and ask for
//! the right refresh. It resolves to a plain `bool` and never returns an
//! error: every failure kind is converted to a user-visible alert here,
//! so call sites cannot forget a failure path.

use std::future::Future;
use std::sync::Arc;

use crossbeam_channel::Sender;
use thiserror::Error;

use crate::action::{ActionDescriptor, ConfirmCopy, HttpMethod, NotifyMode};
use crate::notify::Notifier;
use crate::outcome::{normalize, ActionOutcome, RawResponse};
use crate::pending::PendingNoticeStore;
use crate::protocol::UiEvent;

/// One outgoing HTTP request, transport-agnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpCall {
    pub method: HttpMethod,
    /// Path relative to the configured API base URL.
    pub endpoint: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl HttpCall {
    pub fn get(endpoint: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            method: HttpMethod::Get,
            endpoint: endpoint.into(),
            query,
            body: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid request target: {0}")]
    InvalidTarget(String),
}

/// Sends a raw HTTP call and returns the raw reply. Implemented over
/// reqwest in the network thread and with canned replies in tests.
pub trait Transport: Send + Sync {
    fn send(&self, call: HttpCall) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn send(&self, call: HttpCall) -> impl Future<Output = Result<RawResponse, TransportError>> + Send {
        (**self).send(call)
    }
}

/// Asks the operator to confirm an action, suspending until they respond.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, copy: ConfirmCopy) -> impl Future<Output = bool> + Send;
}

pub struct ActionExecutor<T, C> {
    transport: T,
    confirm: C,
    notifier: Arc<Notifier>,
    pending: Option<PendingNoticeStore>,
    event_tx: Sender<UiEvent>,
}

impl<T: Transport, C: ConfirmPrompt> ActionExecutor<T, C> {
    pub fn new(
        transport: T,
        confirm: C,
        notifier: Arc<Notifier>,
        pending: Option<PendingNoticeStore>,
        event_tx: Sender<UiEvent>,
    ) -> Self {
        Self {
            transport,
            confirm,
            notifier,
            pending,
            event_tx,
        }
    }

    /// Run one action. Resolves `true` iff it completed successfully end
    /// to end. A declined confirmation or a caller veto resolves `false`
    /// with zero side effects - no request is issued.
    pub async fn execute(&self, descriptor: ActionDescriptor) -> bool {
        if let Err(message) = descriptor.validate() {
            tracing::error!(?descriptor, error = %message, "rejecting malformed descriptor");
            self.notifier.notify_error(&message);
            return false;
        }

        if !self.confirm.confirm(descriptor.confirm.clone()).await {
            return false;
        }

        if let Some(hook) = &descriptor.before_request {
            if !hook() {
                return false;
            }
        }

        self.notifier
            .progress_open(&descriptor.confirm.title, "Contacting the server...");
        let call = HttpCall {
            method: descriptor.method,
            endpoint: descriptor.endpoint.clone(),
            query: Vec::new(),
            // GET and DELETE never carry a body, whatever the descriptor says.
            body: if descriptor.method.bodied() {
                descriptor.payload.clone()
            } else {
                if descriptor.payload.is_some() {
                    tracing::warn!(
                        endpoint = %descriptor.endpoint,
                        method = descriptor.method.as_str(),
                        "dropping payload on bodyless verb"
                    );
                }
                None
            },
        };
        let result = self.transport.send(call).await;
        // The overlay must be gone before any terminal alert shows.
        self.notifier.progress_close();

        let outcome = match result {
            Ok(raw) => normalize(&raw),
            Err(e) => {
                tracing::warn!(endpoint = %descriptor.endpoint, error = %e, "transport failure");
                ActionOutcome::unreachable()
            }
        };

        if outcome.ok {
            self.finish_success(&descriptor, &outcome);
            true
        } else {
            self.notifier.notify_error(&outcome.message);
            if let Some(hook) = &descriptor.on_error {
                hook(&outcome);
            }
            false
        }
    }

    fn finish_success(&self, descriptor: &ActionDescriptor, outcome: &ActionOutcome) {
        let message = descriptor
            .success_message
            .clone()
            .unwrap_or_else(|| outcome.message.clone());

        match descriptor.notify_mode {
            NotifyMode::ReloadWithStoredMessage => {
                if let Some(store) = &self.pending {
                    if let Err(e) = store.store(&message) {
                        // Worst case the message is lost across the reload;
                        // the reload itself still happens.
                        tracing::warn!(error = %e, "failed to store pending notice");
                    }
                }
                let _ = self.event_tx.send(UiEvent::ReloadScreen);
            }
            NotifyMode::Toast => {
                self.notifier.notify_success(&message);
                if let Some(grid) = descriptor.refresh_target {
                    let _ = self.event_tx.send(UiEvent::RefreshGrid(grid));
                }
            }
        }

        if let Some(hook) = &descriptor.on_success {
            hook(outcome);
        }
    }
}
