// Google Generative Language `generateContent` request payload
// Author: kelexine (https://github.com/kelexine)

use super::InboundRequest;
use serde::Serialize;
use serde_json::Value;

/// Outbound body for `models/{model}:generateContent`.
///
/// Only a single user turn with one text part is produced; `messages` is not
/// consulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateContentPayload {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Value>,
}

impl GenerateContentPayload {
    pub fn from_prompt(prompt: Option<Value>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        }
    }
}

impl From<InboundRequest> for GenerateContentPayload {
    fn from(req: InboundRequest) -> Self {
        Self::from_prompt(req.prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_becomes_single_text_part() {
        let req = InboundRequest::from_slice(
            br#"{"model":"gemini-1.5-flash","prompt":"Why is the sky blue?","messages":[{"role":"user","content":"ignored"}],"max_tokens":10}"#,
        )
        .unwrap();

        let payload = serde_json::to_value(GenerateContentPayload::from(req)).unwrap();
        assert_eq!(
            payload,
            json!({"contents": [{"parts": [{"text": "Why is the sky blue?"}]}]})
        );
    }

    #[test]
    fn test_non_string_prompt_passed_through() {
        let req = InboundRequest::from_slice(br#"{"model":"gemini-pro","prompt":7}"#).unwrap();

        let payload = serde_json::to_value(GenerateContentPayload::from(req)).unwrap();
        assert_eq!(payload, json!({"contents": [{"parts": [{"text": 7}]}]}));
    }

    #[test]
    fn test_missing_prompt_leaves_empty_part() {
        let payload = serde_json::to_value(GenerateContentPayload::from_prompt(None)).unwrap();
        assert_eq!(payload, json!({"contents": [{"parts": [{}]}]}));
    }
}
