//! HTTP transport over reqwest.

use reqwest::header::CONTENT_TYPE;

use crate::action::HttpMethod;
use crate::executor::{HttpCall, Transport, TransportError};
use crate::outcome::RawResponse;

/// Real transport for the admin REST API. All requests are resolved
/// against a single base URL fixed at startup.
pub struct RestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl RestTransport {
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(TransportError::InvalidTarget(
                "API base URL is empty".to_string(),
            ));
        }
        let client = reqwest::Client::builder()
            .user_agent(concat!("mealdesk-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base_url })
    }
}

fn join_url(base: &str, endpoint: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), endpoint)
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

impl Transport for RestTransport {
    async fn send(&self, call: HttpCall) -> Result<RawResponse, TransportError> {
        let url = join_url(&self.base_url, &call.endpoint);
        let mut request = self.client.request(to_reqwest_method(call.method), &url);
        if !call.query.is_empty() {
            request = request.query(&call.query);
        }
        if let Some(body) = &call.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        tracing::debug!(%url, method = call.method.as_str(), status, "request completed");
        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_handles_trailing_slash() {
        assert_eq!(
            join_url("https://api.example.com/", "/admin/customers"),
            "https://api.example.com/admin/customers"
        );
        assert_eq!(
            join_url("https://api.example.com", "/admin/customers"),
            "https://api.example.com/admin/customers"
        );
    }

    #[test]
    fn test_empty_base_url_rejected() {
        assert!(RestTransport::new("").is_err());
        assert!(RestTransport::new("   ").is_err());
        assert!(RestTransport::new("http://localhost:8000").is_ok());
    }
}
