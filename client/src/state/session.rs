//! Session state for the signed-in operator.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no auth backend. `login` records who is at the keyboard and
//! `logout` forgets them; route guards use `should_redirect_to_login` to bounce
//! anonymous visitors to `/login`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    #[default]
    Manager,
    Viewer,
}

impl Role {
    pub const ALL: &'static [Self] = &[Self::Admin, Self::Manager, Self::Viewer];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Viewer => "viewer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Manager => "Operations manager",
            Self::Viewer => "Read-only",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.as_str() == raw)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl SessionUser {
    /// Up to two uppercase initials for the avatar chip.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
}

impl SessionState {
    pub fn login(&mut self, user: SessionUser) {
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

pub fn should_redirect_to_login(state: &SessionState) -> bool {
    !state.is_signed_in()
}
