use super::*;

#[test]
fn user_deserializes_from_me_payload() {
    let raw = r#"{
        "id": "2f1c9a6e-8a41-4b69-9a53-0f3a34c36e58",
        "name": "alice",
        "email": "alice@example.com",
        "avatar_url": null,
        "is_admin": true
    }"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.name, "alice");
    assert!(user.is_admin);
    assert!(user.avatar_url.is_none());
}

#[test]
fn is_admin_defaults_to_false_when_absent() {
    let raw = r#"{
        "id": "u1",
        "name": "bob",
        "email": "bob@example.com",
        "avatar_url": null
    }"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert!(!user.is_admin);
}
