//! Tests for transformation prompt construction.

use companion_persona::{Style, prompt};
use memory::MemoryRecord;

#[test]
fn memory_context_truncates_to_first_three() {
    let record = MemoryRecord {
        preferences: vec![
            "p1".into(),
            "p2".into(),
            "p3".into(),
            "p4".into(),
            "p5".into(),
        ],
        emotional_patterns: String::new(),
        facts: vec!["f1".into(), "f2".into(), "f3".into(), "f4".into()],
    };
    let block = prompt::memory_context(&record);

    assert!(block.contains("User preferences: p1, p2, p3"));
    assert!(!block.contains("p4"));
    assert!(block.contains("Key facts: f1, f2, f3"));
    assert!(!block.contains("f4"));
    assert!(!block.contains("Emotional patterns:"));
}

#[test]
fn memory_context_of_empty_record_is_empty() {
    assert_eq!(prompt::memory_context(&MemoryRecord::default()), "");
}

#[test]
fn memory_context_with_patterns_only() {
    let record = MemoryRecord {
        emotional_patterns: "anxious before deadlines".into(),
        ..MemoryRecord::default()
    };
    let block = prompt::memory_context(&record);

    assert!(block.starts_with("\n\nUser Context"));
    assert!(block.contains("Emotional patterns: anxious before deadlines"));
    assert!(!block.contains("User preferences:"));
    assert!(!block.contains("Key facts:"));
}

#[test]
fn system_prompt_names_personality_and_traits() {
    let profile = Style::WittyFriend.profile();
    let system = prompt::system(profile);

    assert!(system.contains("Witty Friend"));
    assert!(system.contains(profile.traits));
    assert!(system.contains("DO NOT change the factual content"));
}

#[test]
fn user_prompt_embeds_question_and_response_verbatim() {
    let user = prompt::user(
        "How do I fix this bug?",
        "Check your logs.",
        "",
        "Standard AI",
    );

    assert!(user.contains("How do I fix this bug?"));
    assert!(user.contains("Check your logs."));
    assert!(user.contains("Rewrite the response in the Standard AI style"));
}
