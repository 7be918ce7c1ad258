use super::*;

#[test]
fn validate_reset_email_trims_value() {
    assert_eq!(validate_reset_email("  doctor@example.com "), Ok("doctor@example.com".to_owned()));
}

#[test]
fn validate_reset_email_rejects_blank() {
    assert_eq!(validate_reset_email("   "), Err(MISSING_EMAIL));
}

#[test]
fn confirmation_text_names_address_without_confirming_account() {
    let text = confirmation_text("nobody@example.com");
    assert!(text.starts_with("Si un compte est associé"));
    assert!(text.contains("nobody@example.com"));
}
