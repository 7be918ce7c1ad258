use super::*;
use si7ati::Role;

fn signed_in(role: Role) -> AuthState {
    AuthState {
        identity: Some(Identity {
            id: "3".to_owned(),
            name: "Dr. Médecin".to_owned(),
            email: "doctor@example.com".to_owned(),
            role,
        }),
        loading: false,
    }
}

#[test]
fn identity_caption_uses_role_label() {
    let state = signed_in(Role::Doctor);
    let identity = state.identity.as_ref().unwrap();
    assert_eq!(identity_caption(identity), "Dr. Médecin · Médecin");
}

#[test]
fn menu_items_empty_when_signed_out() {
    let state = AuthState { identity: None, loading: false };
    assert!(menu_items(&state).is_empty());
}

#[test]
fn menu_items_hide_settings_from_patients() {
    let routes: Vec<Route> = menu_items(&signed_in(Role::Patient)).into_iter().map(|i| i.route).collect();
    assert!(!routes.contains(&Route::Settings));
    assert!(routes.contains(&Route::Dashboard));
}

#[test]
fn menu_items_show_settings_to_admins() {
    let routes: Vec<Route> = menu_items(&signed_in(Role::Admin)).into_iter().map(|i| i.route).collect();
    assert_eq!(routes.last(), Some(&Route::Settings));
}
