//! Prompt templates for personality transformation.
//!
//! Pure string builders with named slots (question, baseline answer,
//! traits, memory block), kept separate from the call-issuing
//! operations so they can be tested on their own.

use crate::Profile;
use memory::MemoryRecord;

/// How many preferences and facts the memory block folds in.
const MEMORY_ITEM_LIMIT: usize = 3;

/// System instruction for the baseline (style-free) response.
pub const STANDARD_SYSTEM: &str = "You are a helpful, neutral AI assistant. Provide clear, informative responses without any particular personality style.";

/// Build the user-context block folded into a transformation prompt.
///
/// Lists up to the first 3 preferences (comma-joined), the
/// emotional-patterns text when non-empty, and up to the first 3
/// facts (comma-joined). Returns an empty string when no sub-part is
/// non-empty, so the block can be dropped from the prompt entirely.
pub fn memory_context(memory: &MemoryRecord) -> String {
    let mut parts = Vec::new();

    if !memory.preferences.is_empty() {
        parts.push(format!(
            "User preferences: {}",
            join_first(&memory.preferences)
        ));
    }
    if !memory.emotional_patterns.is_empty() {
        parts.push(format!("Emotional patterns: {}", memory.emotional_patterns));
    }
    if !memory.facts.is_empty() {
        parts.push(format!("Key facts: {}", join_first(&memory.facts)));
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!(
            "\n\nUser Context (use this to personalize your response):\n{}",
            parts.join("\n")
        )
    }
}

fn join_first(items: &[String]) -> String {
    items
        .iter()
        .take(MEMORY_ITEM_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// System instruction naming the target personality and its traits,
/// with the keep-facts constraint.
pub fn system(profile: &Profile) -> String {
    format!(
        r#"You are transforming a standard AI response into a {name} style response.

Your personality traits: {traits}

Your task:
1. Keep the core information and accuracy of the original response
2. Transform the tone, style, and delivery to match the {name} personality
3. Use the user's memory context to personalize the response (reference their preferences, acknowledge their emotional state, mention relevant facts)
4. Make it feel natural and authentic to the personality style

DO NOT change the factual content, only the delivery style and personalization."#,
        name = profile.name,
        traits = profile.traits,
    )
}

/// User instruction embedding the question, the baseline response,
/// and the (possibly empty) memory context block.
pub fn user(question: &str, standard_response: &str, memory_context: &str, name: &str) -> String {
    format!(
        r#"Transform this response:

**Original User Question:**
{question}

**Standard Response:**
{standard_response}
{memory_context}

**Your Task:**
Rewrite the response in the {name} style, incorporating the user context naturally.
Make it feel personalized and authentic to both the personality and the user's situation."#
    )
}
