use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, COOKIE},
    Client,
};
use shared::{
    error::ApiError,
    protocol::{DecomposeRequest, DecomposeResponse, DECOMPOSE_ROUTE},
};
use tracing::{debug, info, warn};
use url::Url;

pub mod error;

pub use error::DecomposeError;

/// The single backend operation the UI talks to.
#[async_trait]
pub trait DecomposeApi: Send + Sync {
    async fn decompose(
        &self,
        request: &DecomposeRequest,
    ) -> Result<DecomposeResponse, DecomposeError>;
}

#[derive(Debug, Clone, Default)]
pub struct DecomposeClientBuilder {
    server_url: String,
    session_cookie: Option<String>,
    timeout: Option<Duration>,
}

impl DecomposeClientBuilder {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..Default::default()
        }
    }

    /// Raw `Cookie` header value sent with every request, e.g. `session=abc`.
    pub fn session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<DecomposeClient, DecomposeError> {
        let endpoint = decompose_endpoint(&self.server_url)?;

        let mut headers = HeaderMap::new();
        if let Some(cookie) = self.session_cookie.as_deref() {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| DecomposeError::InvalidCookie(e.to_string()))?;
            headers.insert(COOKIE, value);
        }

        let mut http = Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http
            .build()
            .map_err(|e| DecomposeError::Transport(format!("failed to build http client: {e}")))?;

        Ok(DecomposeClient { http, endpoint })
    }
}

/// `reqwest`-backed [`DecomposeApi`].
#[derive(Debug, Clone)]
pub struct DecomposeClient {
    http: Client,
    endpoint: Url,
}

impl DecomposeClient {
    pub fn new(server_url: impl Into<String>) -> Result<Self, DecomposeError> {
        DecomposeClientBuilder::new(server_url).build()
    }

    pub fn builder(server_url: impl Into<String>) -> DecomposeClientBuilder {
        DecomposeClientBuilder::new(server_url)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn decompose_endpoint(server_url: &str) -> Result<Url, DecomposeError> {
    let invalid = |reason: String| DecomposeError::InvalidUrl {
        url: server_url.to_string(),
        reason,
    };

    let trimmed = server_url.trim();
    // Url::join drops the last path segment unless the base ends with '/'.
    let base = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    let base = Url::parse(&base).map_err(|e| invalid(e.to_string()))?;
    if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
        return Err(invalid("expected an http(s) base url".to_string()));
    }
    base.join(DECOMPOSE_ROUTE.trim_start_matches('/'))
        .map_err(|e| invalid(e.to_string()))
}

#[async_trait]
impl DecomposeApi for DecomposeClient {
    async fn decompose(
        &self,
        request: &DecomposeRequest,
    ) -> Result<DecomposeResponse, DecomposeError> {
        info!(
            endpoint = %self.endpoint,
            task_len = request.task_description.len(),
            "decompose: sending request"
        );
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| DecomposeError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or_default().to_string();
            let message = match response.bytes().await {
                Ok(body) => serde_json::from_slice::<ApiError>(&body)
                    .ok()
                    .map(|body| body.error)
                    .filter(|message| !message.is_empty()),
                Err(err) => {
                    debug!(%err, "decompose: failed to read error body");
                    None
                }
            };
            warn!(
                status = status.as_u16(),
                %reason,
                message = message.as_deref().unwrap_or_default(),
                "decompose: request failed"
            );
            return Err(DecomposeError::Status {
                status: status.as_u16(),
                reason,
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DecomposeError::Transport(e.to_string()))?;
        let parsed: DecomposeResponse =
            serde_json::from_slice(&body).map_err(|e| DecomposeError::Decode(e.to_string()))?;
        info!(status = status.as_u16(), "decompose: response received");
        Ok(parsed)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
