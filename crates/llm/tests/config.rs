//! Tests for provider construction from config.

use companion_llm::{Client, Error, ProviderConfig};

#[test]
fn build_fails_without_api_key() {
    let config = ProviderConfig::default();
    let result = config.build(Client::new());
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn build_fails_with_blank_api_key() {
    let config = ProviderConfig {
        api_key: "   ".into(),
        ..ProviderConfig::default()
    };
    let result = config.build(Client::new());
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn build_succeeds_with_api_key() {
    let config = ProviderConfig {
        api_key: "sk-test".into(),
        ..ProviderConfig::default()
    };
    assert!(config.build(Client::new()).is_ok());
}

#[test]
fn deserialized_config_defaults_model() {
    let config: ProviderConfig = serde_json::from_str(r#"{"api_key": "sk-test"}"#).expect("config");
    assert_eq!(config.model, companion_llm::DEFAULT_MODEL);
    assert!(config.base_url.is_none());
}

#[test]
fn base_url_points_build_at_custom_endpoint() {
    let config = ProviderConfig {
        api_key: "sk-test".into(),
        base_url: Some("http://localhost:8080/v1/chat/completions".into()),
        ..ProviderConfig::default()
    };
    let provider = config.build(Client::new()).expect("provider");
    assert_eq!(
        provider.http().endpoint(),
        "http://localhost:8080/v1/chat/completions"
    );
}
