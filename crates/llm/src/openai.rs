//! OpenAI-compatible completion provider.
//!
//! Covers the OpenAI API, local Ollama, and any other service
//! exposing the OpenAI chat completions endpoint.

use crate::{ChatConfig, HttpProvider, Message, Provider, Request, Result};
use reqwest::Client;

/// OpenAI-compatible endpoint URLs.
pub mod endpoint {
    /// OpenAI chat completions.
    pub const OPENAI: &str = "https://api.openai.com/v1/chat/completions";
    /// Ollama local chat completions.
    pub const OLLAMA: &str = "http://localhost:11434/v1/chat/completions";
}

/// An OpenAI-compatible completion provider.
#[derive(Clone)]
pub struct OpenAI {
    http: HttpProvider,
}

impl OpenAI {
    /// Create a provider targeting the OpenAI API.
    pub fn api(client: Client, key: &str) -> Result<Self> {
        Self::custom(client, key, endpoint::OPENAI)
    }

    /// Create a provider targeting a local Ollama instance (no API key).
    pub fn ollama(client: Client) -> Self {
        Self {
            http: HttpProvider::no_auth(client, endpoint::OLLAMA),
        }
    }

    /// Create a provider targeting a custom OpenAI-compatible endpoint.
    pub fn custom(client: Client, key: &str, endpoint: &str) -> Result<Self> {
        Ok(Self {
            http: HttpProvider::bearer(client, key, endpoint)?,
        })
    }

    /// The underlying HTTP transport.
    pub fn http(&self) -> &HttpProvider {
        &self.http
    }
}

impl Provider for OpenAI {
    async fn complete(&self, config: &ChatConfig, messages: &[Message]) -> Result<String> {
        let request = Request::new(config, messages);
        self.http.complete(&request).await
    }
}
