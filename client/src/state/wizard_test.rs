use super::*;

/// Three steps; step N validates when `ok[N]` is true.
struct Toy {
    ok: [bool; 3],
}

impl StepForm for Toy {
    const STEP_TITLES: &'static [&'static str] = &["One", "Two", "Three"];

    fn validate_step(&self, step: usize) -> Vec<String> {
        if self.ok.get(step).copied().unwrap_or(true) {
            Vec::new()
        } else {
            vec![format!("step {step} incomplete")]
        }
    }
}

#[test]
fn next_blocked_when_step_invalid() {
    let form = Toy { ok: [false, true, true] };
    let mut wizard = Wizard::default();

    assert!(!wizard.next(&form));
    assert_eq!(wizard.current, 0);
    assert!(!wizard.errors.is_empty());
}

#[test]
fn next_advances_and_tracks_furthest() {
    let form = Toy { ok: [true, true, true] };
    let mut wizard = Wizard::default();

    assert!(wizard.next(&form));
    assert!(wizard.next(&form));
    assert_eq!(wizard.current, 2);
    assert_eq!(wizard.furthest, 2);
    assert!(wizard.is_last::<Toy>());
    assert!(!wizard.next(&form));
    assert_eq!(wizard.current, 2);
}

#[test]
fn errors_clear_once_step_fixed() {
    let mut form = Toy { ok: [false, true, true] };
    let mut wizard = Wizard::default();
    wizard.next(&form);
    assert!(!wizard.errors.is_empty());

    form.ok[0] = true;
    assert!(wizard.next(&form));
    assert!(wizard.errors.is_empty());
}

#[test]
fn back_always_allowed_and_clears_errors() {
    let form = Toy { ok: [true, false, true] };
    let mut wizard = Wizard::default();
    wizard.next(&form);
    wizard.next(&form);
    assert!(!wizard.errors.is_empty());

    assert!(wizard.back());
    assert_eq!(wizard.current, 0);
    assert!(wizard.errors.is_empty());
    assert!(!wizard.back());
}

#[test]
fn go_to_forward_stops_at_first_invalid_step() {
    let form = Toy { ok: [true, false, true] };
    let mut wizard = Wizard::default();

    assert!(!wizard.go_to(2, &form));
    assert_eq!(wizard.current, 1);
    assert_eq!(wizard.errors, vec!["step 1 incomplete".to_owned()]);
}

#[test]
fn go_to_backward_and_out_of_range() {
    let form = Toy { ok: [true, true, true] };
    let mut wizard = Wizard::default();
    assert!(wizard.go_to(2, &form));
    assert!(wizard.go_to(0, &form));
    assert_eq!(wizard.current, 0);
    assert_eq!(wizard.furthest, 2);
    assert!(!wizard.go_to(3, &form));
}

#[test]
fn submit_parks_on_first_failing_step() {
    let form = Toy { ok: [true, true, false] };
    let mut wizard = Wizard::default();
    wizard.go_to(1, &form);

    let err = wizard.submit(&form).unwrap_err();
    assert_eq!(err, vec!["step 2 incomplete".to_owned()]);
    assert_eq!(wizard.current, 2);
    assert_eq!(wizard.errors, err);
}

#[test]
fn progress_and_titles() {
    let mut wizard = Wizard::default();
    assert_eq!(wizard.title::<Toy>(), "One");
    assert_eq!(wizard.progress_percent::<Toy>(), 33);
    wizard.current = 2;
    assert_eq!(wizard.progress_percent::<Toy>(), 100);
    assert!(!wizard.is_first());
    wizard.reset();
    assert!(wizard.is_first());
}
