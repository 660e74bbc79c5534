use crate::common::user_envelope;
use dm_account_client::prelude::*;
use serde_json::json;

fn details_json() -> serde_json::Value {
    json!({
        "resource": {
            "login": "golovan",
            "roles": ["Guest", "Player"],
            "mediumPictureUrl": null,
            "smallPictureUrl": null,
            "status": null,
            "rating": { "enabled": true, "quality": 0, "quantity": 0 },
            "online": "2024-03-01T10:15:30.123Z",
            "name": null,
            "location": null,
            "registration": "2024-03-01T10:00:00Z",
            "icq": null,
            "skype": null,
            "originalPictureUrl": null,
            "info": { "value": "hello", "parseMode": "Common" },
            "settings": {
                "colorSchema": "Modern",
                "nannyGreetingsMessage": null,
                "paging": {
                    "postsPerPage": 10,
                    "commentsPerPage": 10,
                    "topicsPerPage": 10,
                    "messagesPerPage": 10,
                    "entitiesPerPage": 10
                }
            }
        },
        "metadata": null
    })
}

#[test]
fn test_user_envelope_decodes() {
    let envelope: UserEnvelope = serde_json::from_str(&user_envelope("golovan")).unwrap();
    let user = envelope.resource.unwrap();
    assert_eq!(user.login, "golovan");
    assert_eq!(user.roles, vec![UserRole::Guest, UserRole::Player]);
    assert!(user.rating.enabled);
    assert!(user.online.is_none());
    assert!(user.registration.is_some());
}

#[test]
fn test_user_envelope_rejects_unknown_fields() {
    let result = serde_json::from_value::<UserEnvelope>(json!({
        "resource": null,
        "metadata": null,
        "extra": 1
    }));
    assert!(result.is_err());
}

#[test]
fn test_user_rejects_unknown_role() {
    let result = serde_json::from_value::<UserEnvelope>(json!({
        "resource": {
            "login": "golovan",
            "roles": ["Emperor"],
            "rating": { "enabled": true, "quality": 0, "quantity": 0 }
        }
    }));
    assert!(result.is_err());
}

#[test]
fn test_user_details_envelope_decodes() {
    let envelope: UserDetailsEnvelope = serde_json::from_value(details_json()).unwrap();
    let details = envelope.resource.unwrap();
    assert_eq!(details.login, "golovan");
    assert_eq!(details.settings.color_schema, Some(ColorSchema::Modern));
    assert_eq!(details.settings.paging.as_ref().unwrap().posts_per_page, 10);

    let info = details.info_bb_text().unwrap();
    assert_eq!(info.value.as_deref(), Some("hello"));
    assert_eq!(info.parse_mode, Some(BbParseMode::Common));
}

#[test]
fn test_user_details_requires_timestamps() {
    let mut value = details_json();
    value["resource"]
        .as_object_mut()
        .unwrap()
        .remove("online");
    assert!(serde_json::from_value::<UserDetailsEnvelope>(value).is_err());
}

#[test]
fn test_timestamps_without_offset_are_utc() {
    let envelope: UserEnvelope = serde_json::from_value(json!({
        "resource": {
            "login": "golovan",
            "roles": ["Guest"],
            "rating": { "enabled": true, "quality": 0, "quantity": 0 },
            "online": "2024-03-01T10:15:30.123",
            "registration": "2024-03-01 10:15:30"
        }
    }))
    .unwrap();
    let user = envelope.resource.unwrap();
    assert_eq!(
        user.online.unwrap().to_rfc3339(),
        "2024-03-01T10:15:30.123+00:00"
    );
    assert_eq!(
        user.registration.unwrap().to_rfc3339(),
        "2024-03-01T10:15:30+00:00"
    );

    let mut value = details_json();
    value["resource"]["online"] = json!("2024-03-01T10:15:30.4567");
    value["resource"]["registration"] = json!("2024-03-01T10:00:00");
    let details = serde_json::from_value::<UserDetailsEnvelope>(value)
        .unwrap()
        .resource
        .unwrap();
    assert_eq!(details.registration.to_rfc3339(), "2024-03-01T10:00:00+00:00");
    assert_eq!(details.online.timestamp_subsec_micros(), 456_700);
}

#[test]
fn test_invalid_timestamp_is_rejected() {
    let mut value = details_json();
    value["resource"]["online"] = json!("yesterday");
    assert!(serde_json::from_value::<UserDetailsEnvelope>(value).is_err());

    let result = serde_json::from_value::<UserEnvelope>(json!({
        "resource": {
            "login": "golovan",
            "roles": ["Guest"],
            "rating": { "enabled": true, "quality": 0, "quantity": 0 },
            "registration": "01.03.2024"
        }
    }));
    assert!(result.is_err());
}

#[test]
fn test_paging_settings_reject_unknown_fields() {
    let mut value = details_json();
    value["resource"]["settings"]["paging"]["extra"] = json!(1);
    assert!(serde_json::from_value::<UserDetailsEnvelope>(value).is_err());
}

#[test]
fn test_info_as_plain_string_is_not_bb_text() {
    let mut value = details_json();
    value["resource"]["info"] = json!("just text");
    let envelope: UserDetailsEnvelope = serde_json::from_value(value).unwrap();
    assert!(envelope.resource.unwrap().info_bb_text().is_none());
}
