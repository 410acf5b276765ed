// llm-relay - CORS-friendly HTTP relay to the Anthropic, OpenAI and Google LLM APIs
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod server;
pub mod utils;
