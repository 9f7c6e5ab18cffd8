use std::sync::Arc;

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::error::{QuadrantError, QuadrantResult};

pub const ODATA_ACCEPT: &str = "application/json;odata=nometadata";

/// Issues one read request against the list store and returns its JSON body.
///
/// Implementations map a non-success status to [`QuadrantError::Transport`]
/// and every other failure to [`QuadrantError::Unexpected`]. No retries.
pub trait ListTransport {
    fn get_json(&self, url: &Url) -> QuadrantResult<Value>;
}

impl<T: ListTransport + ?Sized> ListTransport for &T {
    fn get_json(&self, url: &Url) -> QuadrantResult<Value> {
        (**self).get_json(url)
    }
}

impl<T: ListTransport + ?Sized> ListTransport for Arc<T> {
    fn get_json(&self, url: &Url) -> QuadrantResult<Value> {
        (**self).get_json(url)
    }
}

/// Blocking HTTP transport backed by `reqwest`.
///
/// Timeouts are left at the client defaults.
#[derive(Debug, Clone)]
pub struct HttpListTransport {
    client: Client,
    bearer_token: Option<String>,
}

impl HttpListTransport {
    pub fn new() -> QuadrantResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| QuadrantError::Unexpected(format!("http client error: {e}")))?;
        Ok(Self::with_client(client))
    }

    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            bearer_token: None,
        }
    }

    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.bearer_token = (!token.trim().is_empty()).then_some(token);
        self
    }
}

impl ListTransport for HttpListTransport {
    fn get_json(&self, url: &Url) -> QuadrantResult<Value> {
        tracing::debug!(%url, "list store request");

        let mut request = self.client.get(url.clone()).header(ACCEPT, ODATA_ACCEPT);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| QuadrantError::Unexpected(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or_default().to_owned();
            tracing::warn!(status = status.as_u16(), %reason, %url, "list store request failed");
            return Err(QuadrantError::Transport {
                status: status.as_u16(),
                reason,
            });
        }

        response
            .json::<Value>()
            .map_err(|e| QuadrantError::Unexpected(format!("failed to decode list payload: {e}")))
    }
}
