// Outbound HTTP client shared by the provider adapters
// Author: kelexine (https://github.com/kelexine)

use super::Provider;
use crate::config::{ProvidersConfig, UpstreamConfig};
use crate::error::{RelayError, Result};
use crate::models::InboundRequest;
use crate::utils::logging::sanitize;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use std::error::Error as _;
use std::time::Duration;
use tracing::{debug, error, info};

/// Client for the three upstream provider APIs.
///
/// Holds the pooled HTTP client and the immutable provider configuration
/// (base URLs and credentials) built at startup.
pub struct ProviderClient {
    http_client: Client,
    config: ProvidersConfig,
}

/// A fully buffered upstream answer, relayed byte-for-byte.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl ProviderClient {
    /// Create a client with the configured (optional) timeouts.
    pub fn new(providers: &ProvidersConfig, upstream: &UpstreamConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls();

        if let Some(secs) = upstream.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = upstream.connect_timeout_seconds {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        let http_client = builder
            .build()
            .map_err(|e| RelayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created upstream HTTP client with connection pooling");

        Ok(Self {
            http_client,
            config: providers.clone(),
        })
    }

    /// Forward one inbound request to `provider`. Exactly one outbound call is made.
    pub async fn relay(&self, provider: Provider, request: InboundRequest) -> Result<UpstreamResponse> {
        debug!(%provider, model = ?request.model, "Dispatching to upstream");

        match provider {
            Provider::Anthropic => super::anthropic::forward(self, request).await,
            Provider::OpenAi => super::openai::forward(self, request).await,
            Provider::Google => super::google::forward(self, request).await,
        }
    }

    pub fn config(&self) -> &ProvidersConfig {
        &self.config
    }

    pub(super) fn post(&self, url: &str) -> RequestBuilder {
        self.http_client.post(url)
    }

    /// Serialize `payload`, send it, and buffer the whole response body.
    ///
    /// Any non-transport outcome (including provider 4xx/5xx) is returned as
    /// `Ok` so it can be passed through unchanged.
    pub(super) async fn send_json<T: Serialize>(
        &self,
        provider: Provider,
        request: RequestBuilder,
        payload: &T,
    ) -> Result<UpstreamResponse> {
        let body = serde_json::to_vec(payload)
            .map_err(|e| RelayError::Internal(format!("Failed to serialize request: {}", e)))?;

        let response = request
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONTENT_LENGTH, body.len())
            .body(body)
            .send()
            .await
            .map_err(|e| transport_error(provider, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(provider, e))?;

        info!(%provider, status = status.as_u16(), bytes = body.len(), "Upstream responded");

        Ok(UpstreamResponse { status, body })
    }
}

/// Describe a transport failure without the request URL, which may carry a key.
fn transport_error(provider: Provider, err: reqwest::Error) -> RelayError {
    let err = err.without_url();
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        description.push_str(": ");
        description.push_str(&cause.to_string());
        source = cause.source();
    }

    let description = sanitize(&description);
    error!(%provider, "Upstream request failed: {}", description);
    RelayError::Upstream(description)
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            self.body,
        )
            .into_response()
    }
}
