//! Anthropic Messages API request payload.
//!
//! See the [Anthropic Messages API](https://docs.anthropic.com/en/api/messages).

// Author: kelexine (https://github.com/kelexine)

use super::InboundRequest;
use serde::Serialize;
use serde_json::value::RawValue;
use serde_json::Value;

/// Applied when the caller does not send `max_tokens`.
pub const DEFAULT_MAX_TOKENS: u64 = 4096;

/// Outbound body for `POST /v1/messages`.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Value>,

    pub max_tokens: Value,

    /// Passed through exactly as the caller sent it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Box<RawValue>>,
}

impl From<InboundRequest> for MessagesPayload {
    fn from(req: InboundRequest) -> Self {
        Self {
            model: req.model,
            max_tokens: req.max_tokens.unwrap_or_else(|| Value::from(DEFAULT_MAX_TOKENS)),
            messages: req.messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(body: &str) -> MessagesPayload {
        MessagesPayload::from(InboundRequest::from_slice(body.as_bytes()).unwrap())
    }

    #[test]
    fn test_default_max_tokens() {
        let payload = payload(
            r#"{"model":"claude-3-5-sonnet","messages":[{"role":"user","content":"hi"}]}"#,
        );

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "model": "claude-3-5-sonnet",
                "max_tokens": 4096,
                "messages": [{"role": "user", "content": "hi"}]
            })
        );
    }

    #[test]
    fn test_explicit_max_tokens_and_no_prompt() {
        let payload = payload(
            r#"{"model":"claude-3-haiku","messages":[],"max_tokens":256,"prompt":"ignored"}"#,
        );

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["max_tokens"], 256);
        assert!(value.get("prompt").is_none());
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_caller_values_kept_whatever_their_type() {
        let payload = payload(r#"{"model":7,"max_tokens":"lots","messages":[]}"#);

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"model":7,"max_tokens":"lots","messages":[]}"#
        );
    }

    #[test]
    fn test_messages_forwarded_unmodified() {
        let messages = r#"[{"role":"user","content":[{"type":"text","text":"look"},{"type":"image","source":{"type":"base64","media_type":"image/png","data":"AAA"}}]},{"role":"assistant","content":"ok"}]"#;
        let payload = payload(&format!(r#"{{"model":"claude","messages":{}}}"#, messages));

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            format!(r#"{{"model":"claude","max_tokens":4096,"messages":{}}}"#, messages)
        );
    }
}
