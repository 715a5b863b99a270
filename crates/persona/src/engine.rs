//! Personality-based response transformation.

use crate::{Style, prompt};
use llm::{ChatConfig, Message, Provider, Result};
use memory::MemoryRecord;

/// Sampling temperature for baseline responses.
pub const STANDARD_TEMPERATURE: f32 = 0.5;

/// Sampling temperature for personality transformations.
///
/// Higher than the baseline, so repeated transformations of identical
/// input vary stylistically. The keep-facts constraint lives in the
/// prompt and is not mechanically enforced.
pub const TRANSFORM_TEMPERATURE: f32 = 0.7;

/// A transformation request: the question, the baseline answer, the
/// target style, and optional extracted memory. Transient; nothing is
/// retained across calls.
#[derive(Debug, Clone, Copy)]
pub struct Transformation<'a> {
    /// The original user question.
    pub question: &'a str,
    /// The neutral baseline answer.
    pub standard_response: &'a str,
    /// The target personality style.
    pub style: Style,
    /// Extracted memory to personalize with, if any.
    pub memory: Option<&'a MemoryRecord>,
}

/// Transforms responses to match a personality style while folding in
/// extracted user memory.
///
/// Stateless: each call builds its own request from its arguments and
/// the static catalog.
#[derive(Clone)]
pub struct PersonalityEngine<P> {
    provider: P,
    model: String,
}

impl<P: Provider> PersonalityEngine<P> {
    /// Create an engine over a provider and model.
    pub fn new(provider: P, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Generate a neutral baseline response for a question.
    pub async fn respond(&self, question: &str) -> Result<String> {
        let config = ChatConfig::new(self.model.clone()).temperature(STANDARD_TEMPERATURE);
        let messages = [
            Message::system(prompt::STANDARD_SYSTEM),
            Message::user(question),
        ];
        self.provider.complete(&config, &messages).await
    }

    /// Rewrite a baseline response in the target style.
    pub async fn transform(&self, request: &Transformation<'_>) -> Result<String> {
        let profile = request.style.profile();
        let memory_context = request
            .memory
            .map(prompt::memory_context)
            .unwrap_or_default();

        let config = ChatConfig::new(self.model.clone()).temperature(TRANSFORM_TEMPERATURE);
        let messages = [
            Message::system(prompt::system(profile)),
            Message::user(prompt::user(
                request.question,
                request.standard_response,
                &memory_context,
                profile.name,
            )),
        ];
        self.provider.complete(&config, &messages).await
    }

    /// Baseline response with failures embedded as diagnostic text.
    ///
    /// Display-layer convenience: on failure the returned string is
    /// `"Error generating response: <detail>"` and must not be
    /// treated as a genuine answer.
    pub async fn respond_text(&self, question: &str) -> String {
        match self.respond(question).await {
            Ok(text) => text,
            Err(err) => format!("Error generating response: {err}"),
        }
    }

    /// Transformation with failures embedded as diagnostic text.
    ///
    /// On failure the returned string is
    /// `"Error transforming response: <detail>"`.
    pub async fn transform_text(&self, request: &Transformation<'_>) -> String {
        match self.transform(request).await {
            Ok(text) => text,
            Err(err) => format!("Error transforming response: {err}"),
        }
    }
}
