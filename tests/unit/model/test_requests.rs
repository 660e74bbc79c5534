use assert_json_diff::assert_json_eq;
use dm_account_client::prelude::*;
use serde_json::json;

#[test]
fn test_registration_wire_format() {
    let registration = Registration::new("golovan", "112233", "golovan@mail.ru");
    assert_json_eq!(
        registration.to_wire().unwrap(),
        json!({ "login": "golovan", "password": "112233", "email": "golovan@mail.ru" })
    );
}

#[test]
fn test_login_credentials_use_camel_case_remember_me() {
    let credentials = LoginCredentials::new("golovan", "112233", true);
    assert_json_eq!(
        credentials.to_wire().unwrap(),
        json!({ "login": "golovan", "password": "112233", "rememberMe": true })
    );
}

#[test]
fn test_change_password_wire_format() {
    let change = ChangePassword::new("golovan", "tok", "old", "new");
    assert_json_eq!(
        change.to_wire().unwrap(),
        json!({
            "login": "golovan",
            "token": "tok",
            "oldPassword": "old",
            "newPassword": "new"
        })
    );
}

#[test]
fn test_reset_and_change_email_wire_format() {
    assert_json_eq!(
        ResetPassword::new("golovan", "g@mail.ru").to_wire().unwrap(),
        json!({ "login": "golovan", "email": "g@mail.ru" })
    );
    assert_json_eq!(
        ChangeEmail::new("golovan", "pw", "new@mail.ru")
            .to_wire()
            .unwrap(),
        json!({ "login": "golovan", "password": "pw", "email": "new@mail.ru" })
    );
}

#[test]
fn test_from_json_accepts_wire_names() {
    let credentials = LoginCredentials::from_json(json!({
        "login": "golovan",
        "password": "112233",
        "rememberMe": false
    }))
    .unwrap();
    assert_eq!(credentials, LoginCredentials::new("golovan", "112233", false));
}

#[test]
fn test_from_json_rejects_missing_field() {
    let err = Registration::from_json(json!({ "login": "golovan", "password": "112233" }))
        .unwrap_err();
    match err {
        AppError::Validation(msg) => assert!(msg.contains("email")),
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[test]
fn test_from_json_rejects_unknown_field() {
    let err = ResetPassword::from_json(json!({
        "login": "golovan",
        "email": "g@mail.ru",
        "phone": "123"
    }))
    .unwrap_err();
    match err {
        AppError::Validation(msg) => assert!(msg.contains("phone")),
        other => panic!("Unexpected error: {:?}", other),
    }
}

#[test]
fn test_from_json_rejects_snake_case_alias() {
    let err = ChangePassword::from_json(json!({
        "login": "golovan",
        "token": "tok",
        "old_password": "old",
        "newPassword": "new"
    }))
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn test_display_contains_fields() {
    let registration = Registration::new("golovan", "112233", "golovan@mail.ru");
    assert!(registration.to_string().contains("golovan@mail.ru"));
}
