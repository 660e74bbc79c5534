use dm_account_client::error::{AppError, HttpError};
use reqwest::StatusCode;
use std::time::Duration;

#[test]
fn test_http_error_parses_title() {
    let error = HttpError::new(
        StatusCode::BAD_REQUEST,
        r#"{"title":"Validation failed","status":400,"errors":{"Login":["Short"]}}"#.to_string(),
    );
    assert_eq!(error.title.as_deref(), Some("Validation failed"));
    assert_eq!(error.message(), "Validation failed");
    assert_eq!(error.to_string(), "HTTP 400 Bad Request: Validation failed");
}

#[test]
fn test_http_error_without_json_body() {
    let error = HttpError::new(StatusCode::BAD_GATEWAY, "upstream down".to_string());
    assert_eq!(error.title, None);
    assert_eq!(error.message(), "");
    assert_eq!(error.to_string(), "HTTP 502 Bad Gateway: upstream down");
}

#[test]
fn test_app_error_status() {
    let error: AppError = HttpError::new(StatusCode::FORBIDDEN, String::new()).into();
    assert_eq!(error.status(), Some(StatusCode::FORBIDDEN));
    assert_eq!(AppError::Assertion("x".into()).status(), None);
}

#[test]
fn test_app_error_display_token_not_found() {
    let error = AppError::TokenNotFound {
        login: "golovan".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "activation token for golovan was not received"
    );
}

#[test]
fn test_app_error_display_activation_timeout() {
    let error = AppError::ActivationTimeout {
        login: "golovan".to_string(),
        elapsed: Duration::from_secs(4),
        limit: Duration::from_secs(3),
    };
    assert_eq!(
        error.to_string(),
        "activation token for golovan took 4s, limit is 3s"
    );
}

#[test]
fn test_app_error_display_simple_variants() {
    assert_eq!(
        AppError::Assertion("boom".into()).to_string(),
        "assertion failed: boom"
    );
    assert_eq!(
        AppError::MissingHeader("x-dm-auth-token".into()).to_string(),
        "missing header: x-dm-auth-token"
    );
    assert_eq!(
        AppError::InvalidInput("bad".into()).to_string(),
        "invalid input: bad"
    );
    assert_eq!(
        AppError::Validation("missing field".into()).to_string(),
        "validation error: missing field"
    );
}

#[test]
fn test_app_error_from_json_error() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: AppError = json_error.into();
    assert!(matches!(error, AppError::Json(_)));
    assert!(error.to_string().starts_with("json error:"));
}
