use super::*;

#[test]
fn from_json_reads_stored_fields() {
    let prefs = Preferences::from_json(r#"{"dark_mode":true,"sidebar_collapsed":true}"#);
    assert_eq!(prefs, Preferences { dark_mode: Some(true), sidebar_collapsed: true });
}

#[test]
fn from_json_fills_missing_fields() {
    let prefs = Preferences::from_json(r#"{"sidebar_collapsed":true}"#);
    assert_eq!(prefs.dark_mode, None);
    assert!(prefs.sidebar_collapsed);
}

#[test]
fn from_json_garbage_is_default() {
    assert_eq!(Preferences::from_json("not json"), Preferences::default());
    assert_eq!(Preferences::from_json(""), Preferences::default());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_and_update_are_inert_off_browser() {
    assert_eq!(Preferences::load(), Preferences::default());
    let updated = Preferences::update(|p| p.sidebar_collapsed = true);
    assert!(updated.sidebar_collapsed);
    assert_eq!(Preferences::load(), Preferences::default());
}
