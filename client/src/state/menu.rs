//! Dropdown menu state and placement math.
//!
//! DESIGN
//! ======
//! Only one row menu is open at a time across the whole app. Placement is
//! computed once from the toggle's client rectangle when the menu opens; the
//! list itself renders through a portal so table overflow never clips it.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Vertical gap between the toggle button and the list.
pub const MENU_OFFSET_PX: f64 = 8.0;

/// Screen-space rectangle in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

/// Fixed-position offsets for the menu list (`right`/`top` in CSS pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuPosition {
    pub right: f64,
    pub top: f64,
}

impl MenuPosition {
    pub fn style(self) -> String {
        format!("position: fixed; right: {}px; top: {}px;", self.right, self.top)
    }
}

/// Right-align the list with the toggle and drop it just below.
pub fn menu_position(trigger: Rect, viewport_width: f64) -> MenuPosition {
    MenuPosition {
        right: (viewport_width - trigger.width - trigger.x).max(0.0),
        top: (trigger.y + trigger.height + MENU_OFFSET_PX).max(0.0),
    }
}

/// A click closes the menu unless it landed on the list or its own toggle
/// (the toggle handles that click itself).
pub fn should_close_on_click(open: bool, inside_list: bool, inside_toggle: bool) -> bool {
    open && !inside_list && !inside_toggle
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuState {
    pub open_id: Option<String>,
    pub position: MenuPosition,
}

impl MenuState {
    pub fn open(&mut self, id: &str, position: MenuPosition) {
        self.open_id = Some(id.to_owned());
        self.position = position;
    }

    pub fn close(&mut self) {
        self.open_id = None;
    }

    /// Open `id`, or close it when it is already the open menu.
    pub fn toggle(&mut self, id: &str, position: MenuPosition) {
        if self.is_open(id) {
            self.close();
        } else {
            self.open(id, position);
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open_id.as_deref() == Some(id)
    }
}
