use crate::common::{activation_body, messages_page, messages_page_with_ids};
use std::collections::HashSet;
use dm_account_client::prelude::*;

#[test]
fn test_token_from_confirmation_url() {
    let mail = ActivationMail::from_body(&activation_body(
        "golovan",
        Some("http://5.63.153.31:5051/activate/0f9a-11"),
        None,
    ))
    .unwrap();
    assert_eq!(mail.token().as_deref(), Some("0f9a-11"));
}

#[test]
fn test_url_wins_over_uri() {
    let mail = ActivationMail::from_body(&activation_body(
        "golovan",
        Some("http://host/activate/from-url"),
        Some("http://host/password/from-uri"),
    ))
    .unwrap();
    assert_eq!(mail.token().as_deref(), Some("from-url"));
}

#[test]
fn test_uri_used_when_url_missing_or_empty() {
    let missing = ActivationMail::from_body(&activation_body(
        "golovan",
        None,
        Some("http://host/password/reset-1"),
    ))
    .unwrap();
    assert_eq!(missing.token().as_deref(), Some("reset-1"));

    let empty = ActivationMail::from_body(&activation_body(
        "golovan",
        Some(""),
        Some("http://host/password/reset-2"),
    ))
    .unwrap();
    assert_eq!(empty.token().as_deref(), Some("reset-2"));
}

#[test]
fn test_trailing_slash_yields_no_token() {
    let mail =
        ActivationMail::from_body(&activation_body("golovan", Some("http://host/activate/"), None))
            .unwrap();
    assert_eq!(mail.token(), None);
}

#[test]
fn test_find_returns_newest_match() {
    let page: MessagesPage = serde_json::from_str(&messages_page(&[
        activation_body("other", Some("http://host/activate/not-mine"), None),
        activation_body("golovan", Some("http://host/activate/newest"), None),
        activation_body("golovan", Some("http://host/activate/older"), None),
    ]))
    .unwrap();
    assert_eq!(page.items.len(), 3);
    assert_eq!(
        page.find_activation_token("golovan").as_deref(),
        Some("newest")
    );
}

#[test]
fn test_find_skips_unparseable_bodies() {
    let page: MessagesPage = serde_json::from_str(&messages_page(&[
        "plain text newsletter".to_string(),
        activation_body("golovan", Some("http://host/activate/tok"), None),
    ]))
    .unwrap();
    assert_eq!(page.find_activation_token("golovan").as_deref(), Some("tok"));
}

#[test]
fn test_find_skips_match_without_link() {
    let page: MessagesPage = serde_json::from_str(&messages_page(&[
        activation_body("golovan", None, None),
        activation_body("golovan", None, Some("http://host/password/tok")),
    ]))
    .unwrap();
    assert_eq!(page.find_activation_token("golovan").as_deref(), Some("tok"));
}

#[test]
fn test_find_without_match() {
    let page: MessagesPage = serde_json::from_str(&messages_page(&[activation_body(
        "other",
        Some("http://host/activate/x"),
        None,
    )]))
    .unwrap();
    assert_eq!(page.find_activation_token("golovan"), None);
}

#[test]
fn test_page_tolerates_missing_content() {
    let page: MessagesPage =
        serde_json::from_str(r#"{"total":1,"count":1,"start":0,"items":[{"ID":"a"}]}"#).unwrap();
    assert!(page.items[0].content.is_none());
    assert_eq!(page.find_activation_token("golovan"), None);

    let empty: MessagesPage = serde_json::from_str("{}").unwrap();
    assert!(empty.items.is_empty());
}

fn email_change_page() -> MessagesPage {
    serde_json::from_str(&messages_page_with_ids(&[
        (
            "email".to_string(),
            activation_body("golovan", Some("http://host/activate/email-token"), None),
        ),
        (
            "other".to_string(),
            activation_body("someone", Some("http://host/activate/x"), None),
        ),
        (
            "registration".to_string(),
            activation_body("golovan", Some("http://host/activate/registration-token"), None),
        ),
    ]))
    .unwrap()
}

#[test]
fn test_find_excluding_skips_seen_messages() {
    let page = email_change_page();
    let seen: HashSet<String> = ["email".to_string()].into();
    assert_eq!(
        page.find_activation_token_excluding("golovan", &seen).as_deref(),
        Some("registration-token")
    );

    let all: HashSet<String> = ["email".to_string(), "registration".to_string()].into();
    assert_eq!(page.find_activation_token_excluding("golovan", &all), None);
}

#[test]
fn test_message_ids_only_cover_login() {
    let page = email_change_page();
    let ids = page.message_ids_for("golovan");
    let expected: HashSet<String> = ["email".to_string(), "registration".to_string()].into();
    assert_eq!(ids, expected);
    assert!(page.message_ids_for("nobody").is_empty());
}
