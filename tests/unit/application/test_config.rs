use dm_account_client::prelude::*;

#[test]
fn test_configuration_defaults() {
    let config = Configuration::new("http://localhost:5051");
    assert_eq!(config.host(), "http://localhost:5051");
    assert!(config.headers().is_empty());
    assert!(config.disable_log());
}

#[test]
fn test_configuration_builders() {
    let config = Configuration::new("http://localhost:5051")
        .with_header("x-trace", "1")
        .with_headers([("accept", "application/json"), ("x-trace", "2")])
        .with_disable_log(false);

    assert_eq!(config.headers().len(), 2);
    assert_eq!(config.headers().get("x-trace").map(String::as_str), Some("2"));
    assert!(!config.disable_log());
}

#[test]
fn test_configuration_serde() {
    let config = Configuration::new("http://localhost:5051").with_header("x-trace", "1");
    let json = serde_json::to_string(&config).unwrap();
    let back: Configuration = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
    assert!(config.to_string().contains("localhost:5051"));
}

#[test]
fn test_config_loads_something_usable() {
    let config = Config::new();
    assert!(config.account.host().starts_with("http"));
    assert!(config.mailhog.host().starts_with("http"));
    assert!(config.poll.max_attempts() >= 1);
}
