use super::*;
use si7ati::Role;

fn doctor() -> Identity {
    Identity {
        id: "2".to_owned(),
        name: "Dr. Médecin".to_owned(),
        email: "doctor@example.com".to_owned(),
        role: Role::Doctor,
    }
}

#[test]
fn default_state_is_loading_without_identity() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.identity.is_none());
}

#[test]
fn from_session_view_copies_both_fields() {
    let state = AuthState::from(SessionView { identity: Some(doctor()), is_loading: false });
    assert_eq!(state.identity, Some(doctor()));
    assert!(!state.loading);
}

#[test]
fn session_view_round_trips() {
    let view = SessionView { identity: Some(doctor()), is_loading: true };
    assert_eq!(AuthState::from(view.clone()).session_view(), view);
}
