//! Shared session guard for routed pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page behind the layout applies identical anonymous-visitor redirect
//! behavior.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionState, should_redirect_to_login};

/// Redirect to `/login` whenever no operator is signed in.
pub fn install_login_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_to_login) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
