use super::*;

#[test]
fn default_has_nothing_open() {
    let state = ModalState::default();
    assert!(!state.any_open());
    assert!(!state.is_open("new-client"));
}

#[test]
fn open_then_close() {
    let mut state = ModalState::default();
    state.open("new-client");
    assert!(state.is_open("new-client"));
    assert!(state.any_open());

    state.close();
    assert!(!state.is_open("new-client"));
    assert!(!state.any_open());
}

#[test]
fn second_open_replaces_first() {
    let mut state = ModalState::default();
    state.open("new-client");
    state.open("delete-C002");
    assert!(!state.is_open("new-client"));
    assert!(state.is_open("delete-C002"));
}
