//! Chat-completion request body used for probing.

use serde::Serialize;

/// Prompt sent as the user turn of every probe.
pub const PROBE_PROMPT: &str = "Once upon a time";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: &'static str,
}

/// Minimal chat-completion request. `max_tokens` bounds the generated
/// response so that timings stay comparable across endpoints.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: [ChatMessage; 2],
    pub max_tokens: u32,
}

impl<'a> ChatCompletionRequest<'a> {
    pub fn probe(deployment_name: &'a str, max_tokens: u32) -> Self {
        Self {
            model: deployment_name,
            messages: [
                ChatMessage {
                    role: "system",
                    content: "",
                },
                ChatMessage {
                    role: "user",
                    content: PROBE_PROMPT,
                },
            ],
            max_tokens,
        }
    }
}
