//! Data models for the relay's inbound request and the provider payloads.
//!
//! This module contains the type definitions for request bodies used by:
//! - The relay's uniform inbound request (`request`)
//! - The upstream Anthropic Messages API (`anthropic`)
//! - The upstream OpenAI Chat Completions API (`openai`)
//! - The upstream Google Generative Language API (`google`)

// Author: kelexine (https://github.com/kelexine)

pub mod anthropic;
pub mod google;
pub mod openai;
pub mod request;

pub use anthropic::MessagesPayload;
pub use google::{Content, GenerateContentPayload, Part};
pub use openai::ChatCompletionsPayload;
pub use request::InboundRequest;
