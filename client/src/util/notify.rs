//! Context provider and hook for publishing notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provide_notifications` is called once from `App`. Components call
//! `use_notifier()` and publish through the returned `Copy` handle; toast
//! expiry timers are scheduled here so the store stays timer-free.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

use crate::state::notifications::{NewNotification, NotificationStore};
use crate::util::clock::now_ms;

/// Publishing handle over the shared notification store.
#[derive(Clone, Copy)]
pub struct Notifier {
    pub store: RwSignal<NotificationStore>,
}

impl Notifier {
    /// Publish and, for timed toasts, schedule expiry. Returns the new id.
    pub fn notify(self, new: NewNotification) -> String {
        let mut id = String::new();
        self.store.update(|s| id = s.push(new, now_ms()));
        self.schedule_for(&id);
        id
    }

    /// Publish unless an unread notification with the same title is pending.
    pub fn notify_once(self, new: NewNotification) -> Option<String> {
        let mut id = None;
        self.store.update(|s| id = s.push_once(new, now_ms()));
        if let Some(id) = &id {
            self.schedule_for(id);
        }
        id
    }

    fn schedule_for(self, id: &str) {
        let deadline = self
            .store
            .with_untracked(|s| s.get(id).and_then(|n| n.toast_expires_at_ms));
        if let Some(deadline) = deadline {
            schedule_expiry(self.store, deadline);
        }
    }

    pub fn success(self, title: impl Into<String>, message: impl Into<String>) -> String {
        self.notify(NewNotification::success(title, message))
    }

    pub fn error(self, title: impl Into<String>, message: impl Into<String>) -> String {
        self.notify(NewNotification::error(title, message))
    }

    pub fn warning(self, title: impl Into<String>, message: impl Into<String>) -> String {
        self.notify(NewNotification::warning(title, message))
    }

    pub fn info(self, title: impl Into<String>, message: impl Into<String>) -> String {
        self.notify(NewNotification::info(title, message))
    }

    pub fn dismiss_toast(self, id: &str) {
        self.store.update(|s| {
            s.dismiss_toast(id);
        });
    }

    pub fn mark_read(self, id: &str) {
        self.store.update(|s| {
            s.mark_read(id);
        });
    }

    pub fn mark_all_read(self) {
        self.store.update(NotificationStore::mark_all_read);
    }

    pub fn remove(self, id: &str) {
        self.store.update(|s| {
            s.remove(id);
        });
    }

    pub fn clear_read(self) {
        self.store.update(NotificationStore::clear_read);
    }

    pub fn clear_all(self) {
        self.store.update(NotificationStore::clear_all);
    }
}

/// `setTimeout` takes an `i32` delay; longer waits would wrap negative and fire at once.
pub const MAX_TIMER_DELAY_MS: u64 = 2_147_483_647;

/// Timer delay for a toast due at `deadline_ms`, clamped to what the browser accepts.
pub fn timer_delay_ms(deadline_ms: u64, now_ms: u64) -> u32 {
    let delay = deadline_ms.saturating_sub(now_ms).min(MAX_TIMER_DELAY_MS);
    u32::try_from(delay).unwrap_or(u32::MAX)
}

/// Run expiry as of `deadline_ms` at the latest. The wall clock can read
/// behind the timer that fired, so it never decides alone.
pub fn expire_at_deadline(store: &mut NotificationStore, deadline_ms: u64, now_ms: u64) -> Vec<String> {
    store.expire(now_ms.max(deadline_ms))
}

#[cfg(feature = "hydrate")]
fn schedule_expiry(store: RwSignal<NotificationStore>, deadline_ms: u64) {
    let delay = timer_delay_ms(deadline_ms, now_ms());
    // Fire-and-forget: expiring an already-removed toast is a no-op.
    gloo_timers::callback::Timeout::new(delay, move || {
        store.try_update(|s| {
            expire_at_deadline(s, deadline_ms, now_ms());
        });
    })
    .forget();
}

#[cfg(not(feature = "hydrate"))]
fn schedule_expiry(store: RwSignal<NotificationStore>, deadline_ms: u64) {
    let _ = (store, deadline_ms);
}

/// Create the store, provide it through context, and return the handle.
pub fn provide_notifications() -> Notifier {
    let store = RwSignal::new(NotificationStore::default());
    provide_context(store);
    Notifier { store }
}

/// Handle to the store provided by `provide_notifications`.
pub fn use_notifier() -> Notifier {
    Notifier { store: expect_context::<RwSignal<NotificationStore>>() }
}
