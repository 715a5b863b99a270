//! OpenAI-compatible wire request.

use crate::{ChatConfig, Message};
use serde::Serialize;

/// The JSON body of a chat completions request.
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The model to use.
    pub model: String,

    /// The conversation messages.
    pub messages: Vec<Message>,

    /// Sampling temperature.
    pub temperature: f32,
}

impl Request {
    /// Build a request body from a chat configuration and messages.
    pub fn new(config: &ChatConfig, messages: &[Message]) -> Self {
        Self {
            model: config.model.clone(),
            messages: messages.to_vec(),
            temperature: config.temperature,
        }
    }
}
