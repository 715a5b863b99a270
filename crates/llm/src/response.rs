//! Chat completion response shapes.

use crate::Role;
use serde::Deserialize;

/// A chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    /// A unique identifier for the completion.
    #[serde(default)]
    pub id: String,

    /// The model used for the completion.
    #[serde(default)]
    pub model: String,

    /// The list of completion choices.
    pub choices: Vec<Choice>,

    /// Token usage statistics.
    pub usage: Option<Usage>,
}

impl Response {
    /// Get the content of the first choice.
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }

    /// Get the reason the model stopped generating.
    pub fn reason(&self) -> Option<&FinishReason> {
        self.choices
            .first()
            .and_then(|choice| choice.finish_reason.as_ref())
    }
}

/// A completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The index of this choice in the list.
    #[serde(default)]
    pub index: u32,

    /// The generated message.
    pub message: ResponseMessage,

    /// The reason the model stopped generating.
    pub finish_reason: Option<FinishReason>,
}

/// Message content in a completion response.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ResponseMessage {
    /// The role of the message author.
    pub role: Option<Role>,

    /// The content of the message.
    pub content: Option<String>,
}

/// The reason the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// The model finished naturally
    Stop,

    /// The model hit the max token limit
    Length,

    /// Content was filtered
    ContentFilter,
}

/// Token usage statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,

    /// Number of tokens in the completion
    pub completion_tokens: u32,

    /// Total number of tokens used
    pub total_tokens: u32,
}
