// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::{RelayError, Result};
use crate::models::InboundRequest;
use crate::providers::Provider;
use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{debug, info};

/// Handler for every method and path.
///
/// Order of checks: preflight, method, body parse, path. A malformed body is
/// rejected before the path is looked at.
pub async fn relay_handler(State(state): State<AppState>, request: Request) -> Result<Response> {
    let (parts, body) = request.into_parts();

    if parts.method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }
    if parts.method != Method::POST {
        return Err(RelayError::MethodNotAllowed);
    }

    // Buffer the whole body; there is no size limit.
    let body = to_bytes(body, usize::MAX)
        .await
        .map_err(|e| RelayError::BodyRead(e.to_string()))?;

    let inbound = InboundRequest::from_slice(&body).map_err(|e| {
        debug!("Rejecting request body: {}", e);
        RelayError::InvalidJson
    })?;

    let provider = Provider::from_path(parts.uri.path()).ok_or(RelayError::NotFound)?;

    info!(
        %provider,
        model = %inbound.model_text(),
        "Relaying request"
    );

    let upstream = state.providers.relay(provider, inbound).await?;
    Ok(upstream.into_response())
}
