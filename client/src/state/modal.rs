//! Named-window modal manager.
//!
//! Each `ModalWindow` registers under a name; `ModalOpen` triggers refer to
//! that name. At most one window is open at once.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open_name: Option<String>,
}

impl ModalState {
    /// Open `name`, replacing whichever window was showing.
    pub fn open(&mut self, name: &str) {
        self.open_name = Some(name.to_owned());
    }

    pub fn close(&mut self) {
        self.open_name = None;
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.open_name.as_deref() == Some(name)
    }

    pub fn any_open(&self) -> bool {
        self.open_name.is_some()
    }
}
