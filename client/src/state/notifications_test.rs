use super::*;

// =============================================================
// Toast lifecycle
// =============================================================

#[test]
fn toast_visible_immediately_and_gone_after_duration() {
    let mut store = NotificationStore::default();
    let id = store.push(NewNotification::success("Saved", "Client saved").duration_ms(5_000), 1_000);

    assert!(store.toasts().iter().any(|n| n.id == id));

    assert!(store.expire(5_999).is_empty());
    assert!(store.toasts().iter().any(|n| n.id == id));

    assert_eq!(store.expire(6_000), vec![id.clone()]);
    assert!(store.toasts().iter().all(|n| n.id != id));
    assert!(store.get(&id).is_none());
}

#[test]
fn persistent_notification_survives_toast_expiry() {
    let mut store = NotificationStore::default();
    let id = store.push(NewNotification::warning("Low stock", "Butter 250g").persistent(), 0);

    store.expire(DEFAULT_TOAST_DURATION_MS);

    assert!(store.toasts().is_empty());
    let n = store.get(&id).unwrap();
    assert!(!n.show_toast);
    assert_eq!(n.toast_expires_at_ms, None);
    assert_eq!(store.panel().len(), 1);
}

#[test]
fn zero_duration_toast_never_expires() {
    let mut store = NotificationStore::default();
    let id = store.push(NewNotification::error("Sync failed", "retry later").duration_ms(0), 0);

    assert!(store.expire(u64::MAX).is_empty());
    assert_eq!(store.toasts()[0].id, id);
}

#[test]
fn silent_notification_has_no_toast() {
    let mut store = NotificationStore::default();
    store.push(NewNotification::info("Report", "Weekly report ready").persistent().silent(), 0);

    assert!(store.toasts().is_empty());
    assert_eq!(store.unread_count(), 1);
}

#[test]
fn silent_alone_still_lands_in_panel() {
    let mut store = NotificationStore::default();
    let id = store.push(NewNotification::info("Backup", "Nightly backup done").silent(), 0);

    assert!(store.toasts().is_empty());
    assert_eq!(store.panel().len(), 1);
    assert!(store.remove(&id));
    assert!(store.items.is_empty());
}

#[test]
fn push_once_skips_duplicate_unread_title() {
    let mut store = NotificationStore::default();
    let alert = || NewNotification::warning("Cold-chain alert", "31 °C in Algiers").persistent();

    let first = store.push_once(alert(), 0).unwrap();
    assert!(store.push_once(alert(), 10).is_none());
    assert_eq!(store.panel().len(), 1);
    assert_eq!(store.unread_count(), 1);

    store.mark_read(&first);
    assert!(store.push_once(alert(), 20).is_some());
    assert_eq!(store.panel().len(), 2);
    assert_eq!(store.unread_count(), 1);
}

#[test]
fn dismiss_toast_removes_transient_notification() {
    let mut store = NotificationStore::default();
    let id = store.push(NewNotification::info("Hi", "there"), 0);

    assert!(store.dismiss_toast(&id));
    assert!(store.items.is_empty());
    assert!(!store.dismiss_toast(&id));
}

#[test]
fn toasts_capped_and_newest_first() {
    let mut store = NotificationStore::default();
    let ids = (0..(MAX_VISIBLE_TOASTS as u64 + 2))
        .map(|i| store.push(NewNotification::info(format!("n{i}"), ""), i))
        .collect::<Vec<_>>();

    let toasts = store.toasts();
    assert_eq!(toasts.len(), MAX_VISIBLE_TOASTS);
    assert_eq!(&toasts[0].id, ids.last().unwrap());
}

// =============================================================
// Panel operations
// =============================================================

#[test]
fn mark_read_flips_flag_and_unread_count() {
    let mut store = NotificationStore::default();
    let a = store.push(NewNotification::info("a", "").persistent(), 0);
    store.push(NewNotification::info("b", "").persistent(), 1);
    assert_eq!(store.unread_count(), 2);

    assert!(store.mark_read(&a));
    assert!(store.get(&a).unwrap().read);
    assert_eq!(store.unread_count(), 1);
    assert!(!store.mark_read("missing"));

    store.mark_all_read();
    assert_eq!(store.unread_count(), 0);
}

#[test]
fn panel_sorts_by_priority_then_recency() {
    let mut store = NotificationStore::default();
    let low = store.push(NewNotification::info("low", "").priority(Priority::Low).persistent(), 10);
    let high_old = store.push(NewNotification::error("high old", "").priority(Priority::High).persistent(), 20);
    let high_new = store.push(NewNotification::error("high new", "").priority(Priority::High).persistent(), 30);
    store.push(NewNotification::info("transient", ""), 40);

    let order = store.panel().iter().map(|n| n.id.clone()).collect::<Vec<_>>();
    assert_eq!(order, vec![high_new, high_old, low]);
}

#[test]
fn filtered_by_kind_and_unread() {
    let mut store = NotificationStore::default();
    let err = store.push(NewNotification::error("e", "").persistent(), 0);
    let ok = store.push(NewNotification::success("s", "").persistent(), 1);
    store.mark_read(&ok);

    let errors = store.filtered(NotificationFilter::Kind(NotificationKind::Error));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].id, err);

    let unread = store.filtered(NotificationFilter::Unread);
    assert_eq!(unread.len(), 1);
    assert_eq!(unread[0].id, err);

    assert_eq!(store.filtered(NotificationFilter::All).len(), 2);
}

#[test]
fn clear_read_keeps_unread_and_active_toasts() {
    let mut store = NotificationStore::default();
    let read_quiet = store.push(NewNotification::info("a", "").persistent().silent(), 0);
    let read_toasting = store.push(NewNotification::info("b", "").persistent(), 0);
    let unread = store.push(NewNotification::info("c", "").persistent().silent(), 0);
    store.mark_read(&read_quiet);
    store.mark_read(&read_toasting);

    store.clear_read();

    assert!(store.get(&read_quiet).is_none());
    assert!(store.get(&read_toasting).is_some());
    assert!(store.get(&unread).is_some());
}

#[test]
fn remove_and_clear_all() {
    let mut store = NotificationStore::default();
    let a = store.push(NewNotification::info("a", "").persistent(), 0);
    store.push(NewNotification::info("b", "").persistent(), 0);

    assert!(store.remove(&a));
    assert!(!store.remove(&a));
    assert_eq!(store.items.len(), 1);

    store.clear_all();
    assert!(store.items.is_empty());
}

#[test]
fn action_is_carried_through() {
    let mut store = NotificationStore::default();
    let id = store.push(NewNotification::warning("Overdue", "INV-1004").action("View invoice", "/invoices"), 0);
    let action = store.get(&id).unwrap().action.clone().unwrap();
    assert_eq!(action.label, "View invoice");
    assert_eq!(action.href, "/invoices");
}

#[test]
fn ids_are_unique() {
    let mut store = NotificationStore::default();
    let a = store.push(NewNotification::info("a", ""), 0);
    let b = store.push(NewNotification::info("a", ""), 0);
    assert_ne!(a, b);
}
