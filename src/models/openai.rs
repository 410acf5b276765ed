// OpenAI Chat Completions request payload
// Author: kelexine (https://github.com/kelexine)

use super::InboundRequest;
use serde::Serialize;
use serde_json::value::RawValue;
use serde_json::Value;

/// Outbound body for `POST /v1/chat/completions`. `max_tokens` is not forwarded.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionsPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Box<RawValue>>,
}

impl From<InboundRequest> for ChatCompletionsPayload {
    fn from(req: InboundRequest) -> Self {
        Self {
            model: req.model,
            messages: req.messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_drops_max_tokens() {
        let req = InboundRequest::from_slice(
            br#"{"model":"gpt-4","messages":[{"role":"user","content":"hi"}],"max_tokens":100}"#,
        )
        .unwrap();

        let body = serde_json::to_string(&ChatCompletionsPayload::from(req)).unwrap();
        assert_eq!(body, r#"{"model":"gpt-4","messages":[{"role":"user","content":"hi"}]}"#);
    }

    #[test]
    fn test_message_key_order_preserved() {
        let req = InboundRequest::from_slice(
            br#"{"messages":[{"role":"system","content":"be brief","name":"sys"}],"model":"gpt-4o"}"#,
        )
        .unwrap();

        let body = serde_json::to_string(&ChatCompletionsPayload::from(req)).unwrap();
        assert_eq!(
            body,
            r#"{"model":"gpt-4o","messages":[{"role":"system","content":"be brief","name":"sys"}]}"#
        );
    }

    #[test]
    fn test_mistyped_max_tokens_is_still_dropped() {
        let req = InboundRequest::from_slice(br#"{"model":"gpt-4","messages":[],"max_tokens":"lots"}"#).unwrap();

        let body = serde_json::to_string(&ChatCompletionsPayload::from(req)).unwrap();
        assert_eq!(body, r#"{"model":"gpt-4","messages":[]}"#);
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let body = serde_json::to_string(&ChatCompletionsPayload::from(InboundRequest::default())).unwrap();
        assert_eq!(body, "{}");
    }
}
