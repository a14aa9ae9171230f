//! Response normalization - one canonical outcome shape for every reply.
//!
//! The admin API is not perfectly uniform: some endpoints return
//! `{ "success": bool, "message": "..." }`, some omit the flag, and error
//! paths may return HTML or an empty body. Everything is mapped into a
//! single `ActionOutcome` before any control flow branches on it, so the
//! rest of the client never touches the raw wire shape.

/// A raw HTTP reply as seen by the transport, before interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_2xx(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().contains("json"))
            .unwrap_or(false)
    }
}

/// Canonical result of one administrative action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub ok: bool,
    pub message: String,
    /// Decoded JSON body, when there was one.
    pub payload: Option<serde_json::Value>,
}

pub const GENERIC_SUCCESS: &str = "The operation completed successfully.";
pub const GENERIC_FAILURE: &str = "The operation could not be completed.";
pub const UNREACHABLE: &str = "Could not reach the server. Please try again.";

impl ActionOutcome {
    /// Outcome for a request that never produced a reply (network error,
    /// connection refused, TLS failure).
    pub fn unreachable() -> Self {
        Self {
            ok: false,
            message: UNREACHABLE.to_string(),
            payload: None,
        }
    }
}

/// Map a raw reply to the canonical outcome.
///
/// Success is `success == true` in the body OR a 2xx status - the OR form,
/// because some endpoints omit the explicit flag. Undecodable bodies are
/// classified purely by status; this function never fails.
pub fn normalize(raw: &RawResponse) -> ActionOutcome {
    let decoded = if raw.is_json() {
        serde_json::from_slice::<serde_json::Value>(&raw.body).ok()
    } else {
        None
    };

    match decoded {
        Some(value) => {
            let explicit_success = value.get("success").and_then(|v| v.as_bool());
            let ok = explicit_success == Some(true) || raw.is_2xx();
            let message = value
                .get("message")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| generic_message(ok, raw.status));
            ActionOutcome {
                ok,
                message,
                payload: Some(value),
            }
        }
        None => {
            let ok = raw.is_2xx();
            ActionOutcome {
                ok,
                message: generic_message(ok, raw.status),
                payload: None,
            }
        }
    }
}

fn generic_message(ok: bool, status: u16) -> String {
    if ok {
        GENERIC_SUCCESS.to_string()
    } else {
        format!("The server returned status {}.", status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            content_type: Some("application/json; charset=utf-8".to_string()),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_json_success_with_message() {
        let out = normalize(&json_response(
            200,
            r#"{"success": true, "message": "Customer deactivated"}"#,
        ));
        assert!(out.ok);
        assert_eq!(out.message, "Customer deactivated");
        assert!(out.payload.is_some());
    }

    #[test]
    fn test_json_failure_with_message() {
        let out = normalize(&json_response(
            500,
            r#"{"success": false, "message": "Holiday overlaps an order window"}"#,
        ));
        assert!(!out.ok);
        assert_eq!(out.message, "Holiday overlaps an order window");
    }

    #[test]
    fn test_2xx_without_explicit_flag_is_success() {
        let out = normalize(&json_response(200, r#"{"message": "Saved"}"#));
        assert!(out.ok);
        assert_eq!(out.message, "Saved");
    }

    #[test]
    fn test_or_rule_explicit_flag_wins_over_status() {
        // The canonical rule is (success == true) OR 2xx.
        let out = normalize(&json_response(500, r#"{"success": true}"#));
        assert!(out.ok);
        assert_eq!(out.message, GENERIC_SUCCESS);

        let out = normalize(&json_response(200, r#"{"success": false}"#));
        assert!(out.ok);
    }

    #[test]
    fn test_non_json_204_is_success() {
        let out = normalize(&RawResponse {
            status: 204,
            content_type: None,
            body: Vec::new(),
        });
        assert!(out.ok);
        assert_eq!(out.message, GENERIC_SUCCESS);
        assert!(out.payload.is_none());
    }

    #[test]
    fn test_non_json_error_classified_by_status() {
        let out = normalize(&RawResponse {
            status: 502,
            content_type: Some("text/html".to_string()),
            body: b"<html>Bad Gateway</html>".to_vec(),
        });
        assert!(!out.ok);
        assert_eq!(out.message, "The server returned status 502.");
    }

    #[test]
    fn test_undecodable_body_with_json_content_type() {
        // Truncated or garbage JSON must not panic; fall back to status.
        let out = normalize(&json_response(200, r#"{"success": tru"#));
        assert!(out.ok);
        assert_eq!(out.message, GENERIC_SUCCESS);
        assert!(out.payload.is_none());

        let out = normalize(&json_response(500, "not json at all"));
        assert!(!out.ok);
    }

    #[test]
    fn test_unreachable_outcome() {
        let out = ActionOutcome::unreachable();
        assert!(!out.ok);
        assert_eq!(out.message, UNREACHABLE);
    }
}
