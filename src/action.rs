//! Action descriptors - declarative configuration for one confirm-mutate-refresh action.
//!
//! A descriptor is built at the moment the operator clicks an action control
//! (toggle, delete, cancel), handed to the executor by value, and discarded
//! once the action settles. It is never stored.

use std::fmt;

use crate::grid::GridId;
use crate::outcome::ActionOutcome;

/// HTTP verb for an administrative action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether this verb carries a JSON body. GET never does, and DELETE
    /// carries no payload by API convention.
    pub fn bodied(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

/// How a successful action is communicated to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyMode {
    /// Show a corner toast in place and reload the target grid, keeping
    /// its current page/sort/filters.
    #[default]
    Toast,
    /// Persist the message in the pending-notice store and reload the whole
    /// screen; the message is shown once by the startup/reload hook.
    ReloadWithStoredMessage,
}

/// Copy shown in the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmCopy {
    pub title: String,
    pub text: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl Default for ConfirmCopy {
    fn default() -> Self {
        Self {
            title: "Are you sure?".to_string(),
            text: "This action cannot be undone.".to_string(),
            confirm_label: "Yes, proceed".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

/// Last-chance veto hook, run after the operator confirms but before any
/// request is issued. Returning `false` aborts silently.
pub type BeforeRequestHook = Box<dyn Fn() -> bool + Send>;

/// Caller-side side effect invoked with the normalized server outcome.
pub type OutcomeHook = Box<dyn Fn(&ActionOutcome) + Send>;

/// Declarative description of one state-changing administrative action.
///
/// Exactly one request is issued per confirmed descriptor; the descriptor
/// is immutable once execution begins (the executor consumes it by value).
pub struct ActionDescriptor {
    /// Path on the admin API, e.g. `/admin/customers/42/status`.
    pub endpoint: String,
    pub method: HttpMethod,
    /// JSON request body, sent only for bodied verbs.
    pub payload: Option<serde_json::Value>,
    pub confirm: ConfirmCopy,
    /// Overrides the server-supplied message on success.
    pub success_message: Option<String>,
    /// Grid to reload after success when notifying in place.
    pub refresh_target: Option<GridId>,
    pub notify_mode: NotifyMode,
    pub before_request: Option<BeforeRequestHook>,
    pub on_success: Option<OutcomeHook>,
    pub on_error: Option<OutcomeHook>,
}

impl ActionDescriptor {
    /// Create a descriptor with the default POST verb.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: HttpMethod::Post,
            payload: None,
            confirm: ConfirmCopy::default(),
            success_message: None,
            refresh_target: None,
            notify_mode: NotifyMode::Toast,
            before_request: None,
            on_success: None,
            on_error: None,
        }
    }

    /// Create a DELETE descriptor (no payload by convention).
    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Delete,
            ..Self::new(endpoint)
        }
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn confirm_title(mut self, title: impl Into<String>) -> Self {
        self.confirm.title = title.into();
        self
    }

    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm.text = text.into();
        self
    }

    pub fn confirm_labels(
        mut self,
        confirm: impl Into<String>,
        cancel: impl Into<String>,
    ) -> Self {
        self.confirm.confirm_label = confirm.into();
        self.confirm.cancel_label = cancel.into();
        self
    }

    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    pub fn refresh_target(mut self, grid: GridId) -> Self {
        self.refresh_target = Some(grid);
        self
    }

    pub fn notify_mode(mut self, mode: NotifyMode) -> Self {
        self.notify_mode = mode;
        self
    }

    pub fn before_request(mut self, hook: impl Fn() -> bool + Send + 'static) -> Self {
        self.before_request = Some(Box::new(hook));
        self
    }

    pub fn on_success(mut self, hook: impl Fn(&ActionOutcome) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(hook));
        self
    }

    pub fn on_error(mut self, hook: impl Fn(&ActionOutcome) + Send + 'static) -> Self {
        self.on_error = Some(Box::new(hook));
        self
    }

    /// Basic sanity check before dispatch. Hooks are exempt; only the wire
    /// fields are validated. A payload on a bodyless verb is tolerated
    /// here and stripped by the executor at send time.
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("Action endpoint cannot be empty".to_string());
        }
        if !self.endpoint.starts_with('/') {
            return Err(format!(
                "Action endpoint must be an absolute API path, got '{}'",
                self.endpoint
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for ActionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDescriptor")
            .field("endpoint", &self.endpoint)
            .field("method", &self.method)
            .field("payload", &self.payload)
            .field("confirm", &self.confirm.title)
            .field("success_message", &self.success_message)
            .field("refresh_target", &self.refresh_target)
            .field("notify_mode", &self.notify_mode)
            .field("before_request", &self.before_request.is_some())
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .finish()
    }
}
