//! Notification store backing toasts and the notification panel.
//!
//! DESIGN
//! ======
//! The store is plain data driven by explicit `now_ms` timestamps so expiry
//! is deterministic under test. Timer scheduling lives in `util::notify`,
//! which wraps this store in an `RwSignal` provided through context.
//!
//! LIFECYCLE
//! =========
//! A notification is created by `push`, its `read` flag only flips to true,
//! and it leaves the store by explicit removal or (when not persistent) by
//! toast expiry.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

/// Default toast lifetime when the producer does not pick one.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5_000;

/// Upper bound on simultaneously rendered toasts.
pub const MAX_VISIBLE_TOASTS: usize = 5;

/// Severity of a notification, drives toast color and icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }
}

/// Ordering hint for the panel; higher priority sorts first in `panel()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Optional call-to-action attached to a notification. Invoking it navigates
/// to `href`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NotificationAction {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub priority: Priority,
    pub timestamp_ms: u64,
    pub read: bool,
    pub action: Option<NotificationAction>,
    pub show_toast: bool,
    pub persistent: bool,
    /// `None` while toasting means the toast stays until dismissed.
    pub toast_expires_at_ms: Option<u64>,
}

/// Producer-side input for `NotificationStore::push`.
#[derive(Clone, Debug, PartialEq)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub priority: Priority,
    pub action: Option<NotificationAction>,
    pub show_toast: bool,
    pub persistent: bool,
    pub duration_ms: u64,
}

impl NewNotification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
            priority: Priority::default(),
            action: None,
            show_toast: true,
            persistent: false,
            duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title, message)
    }

    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn action(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.action = Some(NotificationAction { label: label.into(), href: href.into() });
        self
    }

    /// Keep the notification in the panel after its toast goes away.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }

    /// Skip the toast and deliver straight to the panel. Implies `persistent`.
    #[must_use]
    pub fn silent(mut self) -> Self {
        self.show_toast = false;
        self.persistent = true;
        self
    }

    /// Toast lifetime in milliseconds; `0` keeps it until dismissed.
    #[must_use]
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// Panel filter used by the notifications page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Kind(NotificationKind),
}

impl NotificationFilter {
    fn accepts(self, n: &Notification) -> bool {
        match self {
            Self::All => true,
            Self::Unread => !n.read,
            Self::Kind(kind) => n.kind == kind,
        }
    }
}

/// In-memory notification registry. Items are kept newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationStore {
    pub items: Vec<Notification>,
}

impl NotificationStore {
    /// Publish a notification and return its id.
    pub fn push(&mut self, new: NewNotification, now_ms: u64) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let toast_expires_at_ms = (new.show_toast && new.duration_ms > 0).then(|| now_ms.saturating_add(new.duration_ms));
        self.items.insert(
            0,
            Notification {
                id: id.clone(),
                title: new.title,
                message: new.message,
                kind: new.kind,
                priority: new.priority,
                timestamp_ms: now_ms,
                read: false,
                action: new.action,
                show_toast: new.show_toast,
                persistent: new.persistent,
                toast_expires_at_ms,
            },
        );
        id
    }

    /// Like `push`, but skipped while an unread notification with the same
    /// title is still pending. Used by producers that re-run on every mount.
    pub fn push_once(&mut self, new: NewNotification, now_ms: u64) -> Option<String> {
        if self.has_unread_titled(&new.title) {
            return None;
        }
        Some(self.push(new, now_ms))
    }

    pub fn has_unread_titled(&self, title: &str) -> bool {
        self.items.iter().any(|n| !n.read && n.title == title)
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    /// Notifications currently displayed as toasts, newest first.
    pub fn toasts(&self) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.show_toast).take(MAX_VISIBLE_TOASTS).collect()
    }

    /// Persistent notifications for the panel, high priority first, then newest.
    pub fn panel(&self) -> Vec<&Notification> {
        let mut out = self.items.iter().filter(|n| n.persistent).collect::<Vec<_>>();
        out.sort_by(|a, b| b.priority.cmp(&a.priority).then(b.timestamp_ms.cmp(&a.timestamp_ms)));
        out
    }

    pub fn filtered(&self, filter: NotificationFilter) -> Vec<&Notification> {
        self.panel().into_iter().filter(|n| filter.accepts(n)).collect()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| n.persistent && !n.read).count()
    }

    /// Hide every toast whose deadline has passed. Returns the affected ids.
    pub fn expire(&mut self, now_ms: u64) -> Vec<String> {
        let due = self
            .items
            .iter()
            .filter(|n| n.show_toast && n.toast_expires_at_ms.is_some_and(|at| at <= now_ms))
            .map(|n| n.id.clone())
            .collect::<Vec<_>>();
        for id in &due {
            self.dismiss_toast(id);
        }
        due
    }

    /// Take the toast down. Non-persistent notifications disappear entirely.
    pub fn dismiss_toast(&mut self, id: &str) -> bool {
        let Some(pos) = self.items.iter().position(|n| n.id == id) else {
            return false;
        };
        if self.items[pos].persistent {
            let item = &mut self.items[pos];
            item.show_toast = false;
            item.toast_expires_at_ms = None;
        } else {
            self.items.remove(pos);
        }
        true
    }

    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.read = true;
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn clear_read(&mut self) {
        self.items.retain(|n| !n.read || n.show_toast);
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
    }
}
