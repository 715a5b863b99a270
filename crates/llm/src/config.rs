//! Configuration for completion calls and provider construction.

use serde::{Deserialize, Serialize};

/// Default model when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Per-call chat configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChatConfig {
    /// The model to use.
    pub model: String,

    /// Sampling temperature for the completion.
    pub temperature: f32,
}

impl ChatConfig {
    /// Create a new configuration for a model.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: 0.7,
        }
    }

    /// Set the sampling temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}

/// Provider construction settings.
///
/// The credential is required: `build` fails with a configuration
/// error before any call is attempted when it is missing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// API credential.
    #[serde(default)]
    pub api_key: String,

    /// Model identifier passed to each call.
    #[serde(default = "default_model")]
    pub model: String,

    /// Custom OpenAI-compatible endpoint, if any.
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_model() -> String {
    DEFAULT_MODEL.into()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: None,
        }
    }
}

#[cfg(feature = "http")]
impl ProviderConfig {
    /// Build an [`OpenAI`](crate::OpenAI) provider from this config.
    pub fn build(&self, client: crate::Client) -> crate::Result<crate::OpenAI> {
        if self.api_key.trim().is_empty() {
            return Err(crate::Error::Config(
                "api_key is required, no completion call will be attempted".into(),
            ));
        }
        match &self.base_url {
            Some(url) => crate::OpenAI::custom(client, &self.api_key, url),
            None => crate::OpenAI::api(client, &self.api_key),
        }
    }
}
