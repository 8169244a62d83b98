use super::*;

#[test]
fn validate_login_input_trims_and_builds_user() {
    let user = validate_login_input("  Amina Haddad ", " amina@dairy.dz ", "admin").unwrap();
    assert_eq!(
        user,
        SessionUser { name: "Amina Haddad".to_owned(), email: "amina@dairy.dz".to_owned(), role: Role::Admin }
    );
}

#[test]
fn validate_login_input_requires_name_then_email() {
    assert_eq!(validate_login_input("  ", "a@b.dz", "viewer"), Err("Name is required.".to_owned()));
    assert_eq!(validate_login_input("Amina", "", "viewer"), Err("Email is required.".to_owned()));
}

#[test]
fn validate_login_input_rejects_bad_email_and_role() {
    assert!(validate_login_input("Amina", "not-an-email", "viewer").is_err());
    assert_eq!(validate_login_input("Amina", "a@b.dz", "owner"), Err("Choose a role.".to_owned()));
}
