use super::*;

#[test]
fn failure_messages_carry_status() {
    assert_eq!(request_code_failed_message(429), "request code failed: 429");
    assert_eq!(verify_code_failed_message(401), "verify code failed: 401");
}
