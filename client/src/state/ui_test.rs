use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_light_expanded_closed() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.sidebar_collapsed);
    assert!(!state.notification_drawer_open);
}

// =============================================================
// Section
// =============================================================

#[test]
fn section_default_is_dashboard() {
    assert_eq!(Section::default(), Section::Dashboard);
}

#[test]
fn section_hrefs_are_unique() {
    for (i, a) in Section::ALL.iter().enumerate() {
        for (j, b) in Section::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.href(), b.href());
            }
        }
    }
}

#[test]
fn section_from_path_resolves_nested_routes() {
    assert_eq!(Section::from_path("/"), Section::Dashboard);
    assert_eq!(Section::from_path("/clients"), Section::Clients);
    assert_eq!(Section::from_path("/orders/new"), Section::Orders);
    assert_eq!(Section::from_path("/deliveries/"), Section::Deliveries);
}

#[test]
fn section_from_unknown_path_falls_back_to_dashboard() {
    assert_eq!(Section::from_path("/reports"), Section::Dashboard);
    assert_eq!(Section::from_path(""), Section::Dashboard);
}
