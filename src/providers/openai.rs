// OpenAI Chat Completions adapter
// Author: kelexine (https://github.com/kelexine)

use super::{Provider, ProviderClient, UpstreamResponse};
use crate::error::Result;
use crate::models::{ChatCompletionsPayload, InboundRequest};

pub(super) fn endpoint(base_url: &str) -> String {
    format!("{}/v1/chat/completions", base_url.trim_end_matches('/'))
}

pub(super) async fn forward(client: &ProviderClient, request: InboundRequest) -> Result<UpstreamResponse> {
    let config = &client.config().openai;
    let payload = ChatCompletionsPayload::from(request);

    let request = client
        .post(&endpoint(&config.base_url))
        .header("Authorization", format!("Bearer {}", config.api_key.expose()));

    client.send_json(Provider::OpenAi, request, &payload).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        assert_eq!(
            endpoint("https://api.openai.com"),
            "https://api.openai.com/v1/chat/completions"
        );
    }
}
