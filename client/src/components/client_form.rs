//! New-client form rendered inside a `ModalWindow`.

use leptos::prelude::*;

use crate::components::modal::use_modal;
use crate::data::types::ClientKind;
use crate::state::client_form::ClientDraft;
use crate::state::modal::ModalState;

#[component]
pub fn ClientForm(on_submit: Callback<ClientDraft>) -> impl IntoView {
    let modal = use_modal();
    let draft = RwSignal::new(ClientDraft::default());
    let errors = RwSignal::new(Vec::<String>::new());

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = draft.get_untracked();
        let problems = form.validate();
        if !problems.is_empty() {
            errors.set(problems);
            return;
        }
        errors.set(Vec::new());
        on_submit.run(form);
        draft.set(ClientDraft::default());
        modal.update(ModalState::close);
    };

    let text_field = move |label: &'static str, kind: &'static str, get: fn(&ClientDraft) -> &String, set: fn(&mut ClientDraft, String)| {
        view! {
            <label class="field">
                <span>{label}</span>
                <input
                    type=kind
                    prop:value=move || draft.with(|d| get(d).clone())
                    on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <form class="form-grid" on:submit=on_save novalidate=true>
            <Show when=move || errors.with(|e| !e.is_empty())>
                <ul class="form-errors field--wide">
                    {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                </ul>
            </Show>
            {text_field("Business name", "text", |d| &d.name, |d, v| d.name = v)}
            <label class="field">
                <span>"Client type"</span>
                <select
                    prop:value=move || draft.with(|d| d.kind.clone())
                    on:change=move |ev| draft.update(|d| d.kind = event_target_value(&ev))
                >
                    <option value="">"Select a type"</option>
                    {ClientKind::ALL
                        .iter()
                        .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                        .collect_view()}
                </select>
            </label>
            {text_field("Contact name", "text", |d| &d.contact_name, |d, v| d.contact_name = v)}
            {text_field("Phone", "tel", |d| &d.phone, |d, v| d.phone = v)}
            {text_field("Email", "email", |d| &d.email, |d, v| d.email = v)}
            {text_field("Address", "text", |d| &d.address, |d, v| d.address = v)}
            {text_field("City", "text", |d| &d.city, |d, v| d.city = v)}
            <div class="form-actions field--wide">
                <button type="button" class="btn btn--secondary" on:click=move |_| modal.update(ModalState::close)>
                    "Cancel"
                </button>
                <button type="submit" class="btn btn--primary">"Create client"</button>
            </div>
        </form>
    }
}
