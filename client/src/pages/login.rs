//! Operator sign-in. There is no credential check: the form records who is
//! at the keyboard and which role they act under.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Role, SessionState, SessionUser};
use crate::util::notify::use_notifier;
use crate::util::validate::{email_like, required};

/// Trim and check the sign-in fields, producing the session user.
fn validate_login_input(name: &str, email: &str, role: &str) -> Result<SessionUser, String> {
    if let Some(message) = required(name, "Name").or_else(|| required(email, "Email")).or_else(|| email_like(email, "Email")) {
        return Err(message);
    }
    let role = Role::parse(role).ok_or_else(|| "Choose a role.".to_owned())?;
    Ok(SessionUser { name: name.trim().to_owned(), email: email.trim().to_owned(), role })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifier = use_notifier();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role = RwSignal::new(Role::default().as_str().to_owned());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login_input(&name.get(), &email.get(), &role.get()) {
            Ok(user) => {
                leptos::logging::log!("signed in {} as {}", user.email, user.role.as_str());
                notifier.success("Welcome", format!("Signed in as {}.", user.name));
                session.update(|s| s.login(user));
                navigate("/", NavigateOptions::default());
            }
            Err(message) => info.set(message),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Dairy Admin"</h1>
                <p class="login-card__subtitle">"Distribution back office"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <select class="login-input" prop:value=move || role.get() on:change=move |ev| role.set(event_target_value(&ev))>
                        {Role::ALL
                            .iter()
                            .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
                            .collect_view()}
                    </select>
                    <button class="login-button" type="submit">"Sign in"</button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
