//! The extracted memory record.

use serde::{Deserialize, Serialize};

/// Emotional-patterns sentinel when extraction fails outright.
pub const EXTRACTION_FAILED: &str = "Neutral (Extraction failed, using default)";

/// Emotional-patterns default when the provider reply lacks the key.
pub const NO_PATTERNS: &str = "No clear patterns detected.";

/// Summary sentinel for a record with nothing in it.
pub const NO_MEMORY: &str = "No memory extracted yet.";

/// Structured memory extracted from a user's chat history.
///
/// All three fields are always present: a failed extraction yields a
/// neutral record, never a missing one. Records are immutable values;
/// a new extraction produces a wholly new record and is never merged
/// with a prior one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct MemoryRecord {
    /// Concrete, atomic preference statements, in extraction order.
    pub preferences: Vec<String>,

    /// Free-text description of observed emotional patterns.
    pub emotional_patterns: String,

    /// Atomic facts worth remembering, in extraction order.
    pub facts: Vec<String>,
}

impl MemoryRecord {
    /// The neutral record returned when extraction fails.
    pub fn neutral() -> Self {
        Self {
            preferences: Vec::new(),
            emotional_patterns: EXTRACTION_FAILED.into(),
            facts: Vec::new(),
        }
    }

    /// Whether the record carries no extracted content.
    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty() && self.emotional_patterns.is_empty() && self.facts.is_empty()
    }

    /// Format the record as a human-readable summary.
    ///
    /// Sections are emitted only for non-empty fields; an all-empty
    /// record yields the fixed [`NO_MEMORY`] sentinel.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if !self.preferences.is_empty() {
            parts.push("**User Preferences:**".to_owned());
            for pref in &self.preferences {
                parts.push(format!("- {pref}"));
            }
        }

        if !self.emotional_patterns.is_empty() {
            parts.push(format!(
                "\n**Emotional Patterns:** {}",
                self.emotional_patterns
            ));
        }

        if !self.facts.is_empty() {
            parts.push("\n**Key Facts:**".to_owned());
            for fact in &self.facts {
                parts.push(format!("- {fact}"));
            }
        }

        if parts.is_empty() {
            NO_MEMORY.to_owned()
        } else {
            parts.join("\n")
        }
    }
}

/// Format a memory record into a readable summary string for prompts
/// and display. Pure and total over any valid record.
pub fn format_memory_summary(record: &MemoryRecord) -> String {
    record.summary()
}
