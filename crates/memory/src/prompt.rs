//! Prompt templates for memory extraction.
//!
//! Pure string builders, kept separate from the call-issuing
//! operation so they can be tested on their own.

/// System instruction for the extraction call.
pub const SYSTEM: &str = r#"You are an expert at analyzing human communication patterns and extracting meaningful insights.

Your task is to analyze the following chat messages from a single user and extract structured information.

Analyze the messages carefully and identify:

1. **User Preferences**:
   - What they like/dislike (tools, languages, work styles, activities)
   - Habits and routines they mention
   - Communication preferences
   - Format as a list of specific, concrete preferences

2. **Emotional Patterns**:
   - Recurring emotional states (anxiety, excitement, frustration, calm)
   - Triggers that cause specific emotions
   - Overall emotional tone trends
   - Format as a description of patterns observed

3. **Facts Worth Remembering**:
   - Personal information (name, role, job title if mentioned)
   - Constraints (budget limits, technical limitations, time constraints)
   - Goals and aspirations
   - Important context about their situation
   - Format as a list of key facts

Be specific and evidence-based. Only include information that is clearly present in the messages.
Do not make assumptions beyond what is stated."#;

/// Label each chat line with its 1-based position and join with
/// newlines, preserving the original order.
pub fn chat_context(lines: &[String]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("Message {}: {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// User instruction embedding the message count and chat context, and
/// pinning the JSON key contract of the reply.
pub fn user(count: usize, chat_history: &str) -> String {
    format!(
        r#"Analyze these {count} chat messages and extract the structured information:

{chat_history}

Return your analysis as a JSON object with exactly these keys:
- "preferences": array of strings (each preference as a separate item)
- "emotional_patterns": string (description of emotional patterns observed)
- "facts": array of strings (each fact as a separate item)

Return only the JSON object, with no surrounding text."#
    )
}
