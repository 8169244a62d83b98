use super::*;
use crate::state::notifications::NewNotification;

#[test]
fn timer_delay_is_time_left_until_deadline() {
    assert_eq!(timer_delay_ms(6_000, 1_000), 5_000);
    assert_eq!(timer_delay_ms(6_000, 6_500), 0);
}

#[test]
fn timer_delay_clamps_to_browser_limit() {
    assert_eq!(u64::from(timer_delay_ms(u64::MAX, 0)), MAX_TIMER_DELAY_MS);
    assert!(i32::try_from(timer_delay_ms(u64::MAX, 0)).is_ok());
}

#[test]
fn expiry_uses_deadline_when_clock_reads_early() {
    let mut store = NotificationStore::default();
    let id = store.push(NewNotification::success("Saved", "Order placed").duration_ms(5_000), 1_000);
    let deadline = store.get(&id).and_then(|n| n.toast_expires_at_ms).unwrap();
    assert_eq!(deadline, 6_000);

    // Timer fired but the wall clock was stepped back by a millisecond.
    assert_eq!(expire_at_deadline(&mut store, deadline, 5_999), vec![id.clone()]);
    assert!(store.toasts().is_empty());
    assert!(store.get(&id).is_none());
}

#[test]
fn expiry_at_deadline_leaves_later_toasts() {
    let mut store = NotificationStore::default();
    let short = store.push(NewNotification::info("a", "").duration_ms(1_000), 0);
    let long = store.push(NewNotification::info("b", "").duration_ms(9_000), 0);

    assert_eq!(expire_at_deadline(&mut store, 1_000, 0), vec![short]);
    assert_eq!(store.toasts()[0].id, long);
}
