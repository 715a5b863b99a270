//! Tests for extraction prompt construction.

use companion_memory::prompt;

#[test]
fn chat_context_labels_are_one_based_and_ordered() {
    let lines = vec!["first".to_string(), "second".to_string()];
    assert_eq!(
        prompt::chat_context(&lines),
        "Message 1: first\nMessage 2: second"
    );
}

#[test]
fn chat_context_of_empty_input_is_empty() {
    assert_eq!(prompt::chat_context(&[]), "");
}

#[test]
fn user_prompt_embeds_count_and_context() {
    let user = prompt::user(30, "Message 1: hello");
    assert!(user.contains("Analyze these 30 chat messages"));
    assert!(user.contains("Message 1: hello"));
}

#[test]
fn user_prompt_pins_the_json_contract() {
    let user = prompt::user(1, "Message 1: hi");
    assert!(user.contains("\"preferences\": array of strings"));
    assert!(user.contains("\"emotional_patterns\": string"));
    assert!(user.contains("\"facts\": array of strings"));
}

#[test]
fn system_prompt_names_the_three_tasks() {
    assert!(prompt::SYSTEM.contains("User Preferences"));
    assert!(prompt::SYSTEM.contains("Emotional Patterns"));
    assert!(prompt::SYSTEM.contains("Facts Worth Remembering"));
    assert!(prompt::SYSTEM.contains("evidence-based"));
}
