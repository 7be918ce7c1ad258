use super::*;
use si7ati::Role;

#[test]
fn greeting_uses_identity_name() {
    let identity = Identity {
        id: "1".to_owned(),
        name: "Patient Test".to_owned(),
        email: "patient@example.com".to_owned(),
        role: Role::Patient,
    };
    assert_eq!(greeting(Some(&identity)), "Bienvenue, Patient Test");
}

#[test]
fn greeting_without_identity_is_generic() {
    assert_eq!(greeting(None), "Bienvenue");
}
