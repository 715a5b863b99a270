//! No-op completion provider for testing.
//!
//! Implements [`Provider`] but panics on `complete`. Intended for
//! unit tests that exercise prompt construction and formatting logic
//! without making real completion calls.

use crate::{ChatConfig, Message, Provider, Result};

/// A provider that panics on any actual completion call.
///
/// # Panics
///
/// `complete` panics if called. Only use this provider in tests that
/// never issue completions.
#[derive(Clone, Copy)]
pub struct NoopProvider;

impl Provider for NoopProvider {
    async fn complete(&self, _config: &ChatConfig, _messages: &[Message]) -> Result<String> {
        panic!("NoopProvider::complete called, not intended for real completion calls");
    }
}
