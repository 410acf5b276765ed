//! The uniform request body accepted on every relay path.

// Author: kelexine (https://github.com/kelexine)

use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::Value;

/// Body of a `POST /anthropic`, `/openai` or `/google` request.
///
/// Fields are passed through unvalidated: any JSON value is accepted for each
/// of them. `messages` is kept as the caller's raw JSON text because its shape
/// belongs to the target provider; it is re-emitted byte-for-byte. Unknown
/// fields are ignored, and `null` counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundRequest {
    /// Provider model identifier.
    #[serde(default)]
    pub model: Option<Value>,

    /// Conversation turns, forwarded unmodified.
    #[serde(default)]
    pub messages: Option<Box<RawValue>>,

    /// Generation limit (Anthropic only).
    #[serde(default)]
    pub max_tokens: Option<Value>,

    /// Single-turn text prompt (Google only).
    #[serde(default)]
    pub prompt: Option<Value>,
}

impl InboundRequest {
    /// Parse a buffered request body.
    ///
    /// Fails only when the body is not JSON. A JSON value that is not an
    /// object carries no fields and yields an empty request.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        let raw: Box<RawValue> = serde_json::from_slice(body)?;
        Ok(serde_json::from_str(raw.get()).unwrap_or_default())
    }

    /// Model rendered as text: strings as-is, other JSON values in their
    /// JSON form, absent as empty.
    pub fn model_text(&self) -> String {
        match &self.model {
            Some(Value::String(model)) => model.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }
}
