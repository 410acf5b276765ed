// Google Generative Language adapter
// Author: kelexine (https://github.com/kelexine)

use super::{Provider, ProviderClient, UpstreamResponse};
use crate::error::Result;
use crate::models::{GenerateContentPayload, InboundRequest};

/// Build the `generateContent` URL; the key travels as a query parameter.
/// The model is percent-encoded so it always stays a single path segment.
pub(super) fn endpoint(base_url: &str, model: &str, api_key: &str) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent?key={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(model),
        urlencoding::encode(api_key)
    )
}

pub(super) async fn forward(client: &ProviderClient, request: InboundRequest) -> Result<UpstreamResponse> {
    let config = &client.config().google;
    let model = request.model_text();
    let payload = GenerateContentPayload::from(request);

    let request = client.post(&endpoint(&config.base_url, &model, config.api_key.expose()));

    client.send_json(Provider::Google, request, &payload).await
}
