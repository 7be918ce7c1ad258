use super::*;
use si7ati::{Identity, Route};

fn state(role: Option<Role>, loading: bool) -> AuthState {
    AuthState {
        identity: role.map(|role| Identity {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            role,
        }),
        loading,
    }
}

#[test]
fn authenticated_decision_waits_while_loading() {
    assert_eq!(authenticated_decision(&state(None, true)), GuardDecision::Pending);
}

#[test]
fn authenticated_decision_redirects_to_login_when_user_missing() {
    assert_eq!(authenticated_decision(&state(None, false)), GuardDecision::Redirect(Route::Login));
}

#[test]
fn authenticated_decision_allows_when_user_exists() {
    assert_eq!(authenticated_decision(&state(Some(Role::Patient), false)), GuardDecision::Allow);
}

#[test]
fn role_decision_sends_non_admin_to_dashboard() {
    assert_eq!(
        role_decision(&state(Some(Role::Doctor), false), &[Role::Admin]),
        GuardDecision::Redirect(Route::Dashboard)
    );
    assert_eq!(role_decision(&state(Some(Role::Admin), false), &[Role::Admin]), GuardDecision::Allow);
}
