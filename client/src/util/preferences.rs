//! Operator UI preferences persisted in `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only chrome preferences survive a reload; records and notifications are
//! in-memory by design. Reads and writes are hydrate-only and silently no-op
//! on the server.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "dairy_admin_prefs";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// `None` until the operator picks a theme; the system theme applies meanwhile.
    #[serde(default)]
    pub dark_mode: Option<bool>,
    #[serde(default)]
    pub sidebar_collapsed: bool,
}

impl Preferences {
    /// Parse a stored blob, treating anything unreadable as defaults.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    pub fn load() -> Self {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
                .map(|raw| Self::from_json(&raw))
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    pub fn save(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            let Ok(raw) = serde_json::to_string(self) else {
                return;
            };
            let _ = storage.set_item(STORAGE_KEY, &raw);
        }
    }

    /// Load, mutate, and write back in one step.
    pub fn update(f: impl FnOnce(&mut Self)) -> Self {
        let mut prefs = Self::load();
        f(&mut prefs);
        prefs.save();
        prefs
    }
}
