//! Memory extraction over a completion provider.

use crate::{MemoryRecord, NO_PATTERNS, prompt};
use llm::{ChatConfig, Message, Provider, Result};
use serde_json::Value;

/// Sampling temperature for extraction calls. Low, for consistency.
pub const EXTRACTION_TEMPERATURE: f32 = 0.3;

/// Extracts structured memory from user chat messages.
///
/// Issues exactly one completion per extraction and holds no state
/// across calls beyond the provider handle and chat configuration.
#[derive(Clone)]
pub struct MemoryExtractor<P> {
    provider: P,
    config: ChatConfig,
}

impl<P: Provider> MemoryExtractor<P> {
    /// Create an extractor over a provider and model.
    pub fn new(provider: P, model: impl Into<String>) -> Self {
        Self {
            provider,
            config: ChatConfig::new(model).temperature(EXTRACTION_TEMPERATURE),
        }
    }

    /// Extract memory, surfacing provider and parse failures.
    ///
    /// The input may be empty or arbitrarily short; the call is
    /// attempted regardless.
    pub async fn try_extract(&self, lines: &[String]) -> Result<MemoryRecord> {
        let context = prompt::chat_context(lines);
        let messages = [
            Message::system(prompt::SYSTEM),
            Message::user(prompt::user(lines.len(), &context)),
        ];
        let reply = self.provider.complete(&self.config, &messages).await?;
        parse_record(&reply)
    }

    /// Extract memory, absorbing all failures into a neutral record.
    ///
    /// A degraded record is indistinguishable from a truly empty one
    /// at this surface; callers that need to tell them apart should
    /// use [`try_extract`](Self::try_extract). Degradation is logged
    /// at `warn`.
    pub async fn extract(&self, lines: &[String]) -> MemoryRecord {
        match self.try_extract(lines).await {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!("memory extraction failed, using neutral record: {err}");
                MemoryRecord::neutral()
            }
        }
    }
}

/// Parse a provider reply into a record.
///
/// Per-key defaults are substituted unconditionally for absent or
/// mis-shaped keys, so a reply with some keys missing still yields a
/// record with all three fields present. Fails only when the reply is
/// not JSON at all.
pub fn parse_record(reply: &str) -> Result<MemoryRecord> {
    let value: Value = serde_json::from_str(strip_fences(reply))?;

    Ok(MemoryRecord {
        preferences: string_list(value.get("preferences")),
        emotional_patterns: value
            .get("emotional_patterns")
            .and_then(Value::as_str)
            .unwrap_or(NO_PATTERNS)
            .to_owned(),
        facts: string_list(value.get("facts")),
    })
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// Strip a surrounding markdown code fence, if any. Models often wrap
/// JSON replies in ```json fences despite instructions.
fn strip_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
