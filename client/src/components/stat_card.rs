//! Dashboard summary tile.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(into)] icon: String,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] alert: bool,
) -> impl IntoView {
    let body = view! {
        <span class="stat-card__icon" aria-hidden="true">{icon}</span>
        <div class="stat-card__text">
            <div class="stat-card__value">{value}</div>
            <div class="stat-card__label">{label}</div>
        </div>
    };
    match href {
        Some(href) => view! {
            <a class="stat-card" class:stat-card--alert=alert href=href>{body}</a>
        }
        .into_any(),
        None => view! { <div class="stat-card" class:stat-card--alert=alert>{body}</div> }.into_any(),
    }
}
