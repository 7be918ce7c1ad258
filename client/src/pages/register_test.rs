use super::*;

#[test]
fn validate_register_input_trims_name_and_email() {
    assert_eq!(
        validate_register_input(" Sara ", " sara@example.com ", "secret", "secret"),
        Ok(RegisterInput {
            name: "Sara".to_owned(),
            email: "sara@example.com".to_owned(),
            password: "secret".to_owned(),
        })
    );
}

#[test]
fn validate_register_input_requires_fields() {
    assert_eq!(validate_register_input("", "a@b.com", "pw", "pw"), Err(MISSING_FIELDS));
    assert_eq!(validate_register_input("Sara", "  ", "pw", "pw"), Err(MISSING_FIELDS));
    assert_eq!(validate_register_input("Sara", "a@b.com", "", ""), Err(MISSING_FIELDS));
}

#[test]
fn validate_register_input_rejects_mismatched_confirmation() {
    assert_eq!(validate_register_input("Sara", "a@b.com", "pw1", "pw2"), Err(PASSWORD_MISMATCH));
}
