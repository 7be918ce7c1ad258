use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  patient@example.com  ", "password"),
        Ok(("patient@example.com".to_owned(), "password".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "password"), Err(MISSING_FIELDS));
    assert_eq!(validate_login_input("patient@example.com", ""), Err(MISSING_FIELDS));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("a@b.com", " pw "),
        Ok(("a@b.com".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn demo_credentials_point_at_seed_accounts() {
    assert_eq!(demo_credentials(Role::Patient), ("patient@example.com", "password"));
    assert_eq!(demo_credentials(Role::Doctor), ("doctor@example.com", "password"));
    assert_eq!(demo_credentials(Role::Admin), ("admin@example.com", "password"));
}
