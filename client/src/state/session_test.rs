use super::*;

fn operator() -> SessionUser {
    SessionUser { name: "amina benali".to_owned(), email: "amina@dairy.example".to_owned(), role: Role::Admin }
}

#[test]
fn login_then_logout() {
    let mut state = SessionState::default();
    assert!(should_redirect_to_login(&state));

    state.login(operator());
    assert!(state.is_signed_in());
    assert!(!should_redirect_to_login(&state));

    state.logout();
    assert_eq!(state.user, None);
    assert!(should_redirect_to_login(&state));
}

#[test]
fn initials_take_first_two_words() {
    assert_eq!(operator().initials(), "AB");
    let single = SessionUser { name: "Omar".to_owned(), ..operator() };
    assert_eq!(single.initials(), "O");
    let blank = SessionUser { name: "   ".to_owned(), ..operator() };
    assert_eq!(blank.initials(), "");
}

#[test]
fn role_round_trips_through_str() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(*role));
    }
    assert_eq!(Role::parse("root"), None);
    assert_eq!(Role::default(), Role::Manager);
}
