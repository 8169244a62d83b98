use super::*;

#[test]
fn stored_choice_overrides_system() {
    assert!(resolve(Some(true), false));
    assert!(!resolve(Some(false), true));
}

#[test]
fn system_used_without_stored_choice() {
    assert!(resolve(None, true));
    assert!(!resolve(None, false));
}

#[test]
fn attribute_values() {
    assert_eq!(attribute_value(true), "dark");
    assert_eq!(attribute_value(false), "light");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn toggle_flips_and_read_defaults_to_light() {
    assert!(toggle(false));
    assert!(!toggle(true));
    assert!(!read_preference());
}
