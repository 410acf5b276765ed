// Anthropic Messages API adapter
// Author: kelexine (https://github.com/kelexine)

use super::{Provider, ProviderClient, UpstreamResponse};
use crate::error::Result;
use crate::models::{InboundRequest, MessagesPayload};

/// Value sent in the `anthropic-version` header.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

pub(super) fn endpoint(base_url: &str) -> String {
    format!("{}/v1/messages", base_url.trim_end_matches('/'))
}

pub(super) async fn forward(client: &ProviderClient, request: InboundRequest) -> Result<UpstreamResponse> {
    let config = &client.config().anthropic;
    let payload = MessagesPayload::from(request);

    let request = client
        .post(&endpoint(&config.base_url))
        .header("x-api-key", config.api_key.expose())
        .header("anthropic-version", ANTHROPIC_VERSION);

    client.send_json(Provider::Anthropic, request, &payload).await
}
