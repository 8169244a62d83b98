//! Light/dark theme resolution and application.
//!
//! Applies a `data-theme` attribute to `<html>`. The stored preference wins;
//! without one the system `prefers-color-scheme` decides.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::preferences::Preferences;

/// Stored choice first, then the system preference.
pub fn resolve(stored: Option<bool>, system_prefers_dark: bool) -> bool {
    stored.unwrap_or(system_prefers_dark)
}

pub fn attribute_value(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Effective theme at startup.
pub fn read_preference() -> bool {
    resolve(Preferences::load().dark_mode, system_prefers_dark())
}

pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", attribute_value(dark));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Flip the theme, apply it, and remember the choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    Preferences::update(|p| p.dark_mode = Some(next));
    next
}
