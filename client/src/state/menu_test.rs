use super::*;

#[test]
fn rect_contains_edges_and_interior() {
    let r = Rect { x: 10.0, y: 20.0, width: 30.0, height: 40.0 };
    assert!(r.contains(10.0, 20.0));
    assert!(r.contains(25.0, 40.0));
    assert!(r.contains(40.0, 60.0));
    assert!(!r.contains(9.9, 30.0));
    assert!(!r.contains(25.0, 60.1));
}

#[test]
fn menu_position_right_aligns_below_trigger() {
    let trigger = Rect { x: 900.0, y: 100.0, width: 32.0, height: 24.0 };
    let pos = menu_position(trigger, 1_280.0);
    assert_eq!(pos, MenuPosition { right: 348.0, top: 132.0 });
}

#[test]
fn menu_position_clamps_when_trigger_overflows_viewport() {
    let trigger = Rect { x: 1_270.0, y: -50.0, width: 32.0, height: 24.0 };
    let pos = menu_position(trigger, 1_280.0);
    assert_eq!(pos.right, 0.0);
    assert_eq!(pos.top, 0.0);
}

#[test]
fn position_style_is_fixed() {
    let style = MenuPosition { right: 12.0, top: 48.5 }.style();
    assert_eq!(style, "position: fixed; right: 12px; top: 48.5px;");
}

#[test]
fn toggle_opens_then_closes_same_menu() {
    let mut state = MenuState::default();
    let pos = MenuPosition { right: 1.0, top: 2.0 };

    state.toggle("client-C001", pos);
    assert!(state.is_open("client-C001"));
    assert_eq!(state.position, pos);

    state.toggle("client-C001", pos);
    assert!(!state.is_open("client-C001"));
    assert_eq!(state.open_id, None);
}

#[test]
fn opening_another_menu_replaces_current() {
    let mut state = MenuState::default();
    state.open("a", MenuPosition::default());
    state.toggle("b", MenuPosition { right: 5.0, top: 5.0 });
    assert!(!state.is_open("a"));
    assert!(state.is_open("b"));
}

#[test]
fn outside_click_rules() {
    assert!(should_close_on_click(true, false, false));
    assert!(!should_close_on_click(true, true, false));
    assert!(!should_close_on_click(true, false, true));
    assert!(!should_close_on_click(false, false, false));
}
