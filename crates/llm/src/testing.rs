//! Scripted providers for downstream crate tests.

use crate::{ChatConfig, Error, Message, Provider, Result};
use std::sync::{Arc, Mutex};

/// A provider that replies with a fixed body and records every call.
#[derive(Clone)]
pub struct StaticProvider {
    body: String,
    calls: Arc<Mutex<Vec<(ChatConfig, Vec<Message>)>>>,
}

impl StaticProvider {
    /// Create a provider that always replies with `body`.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The calls issued so far, in order.
    pub fn calls(&self) -> Vec<(ChatConfig, Vec<Message>)> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls issued so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Provider for StaticProvider {
    async fn complete(&self, config: &ChatConfig, messages: &[Message]) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((config.clone(), messages.to_vec()));
        Ok(self.body.clone())
    }
}

/// A provider that always fails with a provider error.
#[derive(Clone)]
pub struct FailProvider {
    message: String,
}

impl FailProvider {
    /// Create a provider that always fails with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Provider for FailProvider {
    async fn complete(&self, _config: &ChatConfig, _messages: &[Message]) -> Result<String> {
        Err(Error::Provider(self.message.clone()))
    }
}
