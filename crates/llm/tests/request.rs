//! Tests for the OpenAI-compatible wire request.

use companion_llm::{ChatConfig, Message, Request};

#[test]
fn request_carries_model_and_temperature() {
    let config = ChatConfig::new("gpt-4o-mini").temperature(0.3);
    let req = Request::new(&config, &[Message::user("hi")]);

    assert_eq!(req.model, "gpt-4o-mini");
    assert_eq!(req.temperature, 0.3);
    assert_eq!(req.messages.len(), 1);
}

#[test]
fn request_serializes_roles() {
    let config = ChatConfig::default();
    let req = Request::new(
        &config,
        &[Message::system("be brief"), Message::user("hello")],
    );

    let json = serde_json::to_value(&req).expect("serialize");
    assert_eq!(json["messages"][0]["role"], "system");
    assert_eq!(json["messages"][0]["content"], "be brief");
    assert_eq!(json["messages"][1]["role"], "user");
    assert_eq!(json["messages"][1]["content"], "hello");
}

#[test]
fn default_config_uses_default_model() {
    let config = ChatConfig::default();
    assert_eq!(config.model, companion_llm::DEFAULT_MODEL);
}
