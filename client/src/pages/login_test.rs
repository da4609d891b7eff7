use super::*;

#[test]
fn normalized_email_lowercases_and_trims() {
    assert_eq!(
        normalized_email("  Alice@Example.COM "),
        Some("alice@example.com".to_owned())
    );
}

#[test]
fn normalized_email_rejects_malformed_input() {
    assert_eq!(normalized_email(""), None);
    assert_eq!(normalized_email("not-an-email"), None);
    assert_eq!(normalized_email("@example.com"), None);
    assert_eq!(normalized_email("alice@"), None);
    assert_eq!(normalized_email("alice@localhost"), None);
}
