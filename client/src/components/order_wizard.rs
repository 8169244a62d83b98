//! Four-step new-order wizard: client, products, delivery, review.

use leptos::prelude::*;

use crate::data::query::{client_name, distributor_name, find_product};
use crate::data::types::{AccountStatus, Client, Distributor, Order, Product};
use crate::state::order_form::{OrderDraft, STEP_CLIENT, STEP_DELIVERY, STEP_PRODUCTS, TIME_SLOTS};
use crate::state::wizard::{StepForm, Wizard};
use crate::util::format::money;

#[component]
pub fn OrderWizard(
    clients: Vec<Client>,
    distributors: Vec<Distributor>,
    products: Vec<Product>,
    #[prop(into)] min_delivery_date: String,
    /// Receives the validated draft; the caller assigns id and date.
    on_submit: Callback<OrderDraft>,
) -> impl IntoView {
    let draft = RwSignal::new(OrderDraft::new(&products, &min_delivery_date));
    let wizard = RwSignal::new(Wizard::default());
    let current = Memo::new(move |_| wizard.with(|w| w.current));
    let min_delivery_date = StoredValue::new(min_delivery_date);
    let clients = StoredValue::new(clients);
    let distributors = StoredValue::new(distributors);
    let products = StoredValue::new(products);

    let next = move |_| {
        let form = draft.get_untracked();
        wizard.update(|w| {
            w.next(&form);
        });
    };
    let back = move |_| {
        wizard.update(|w| {
            w.back();
        });
    };
    let submit = move |_| {
        let form = draft.get_untracked();
        let mut ok = false;
        wizard.update(|w| ok = w.submit(&form).is_ok());
        if ok {
            on_submit.run(form);
            let fresh = products.with_value(|ps| min_delivery_date.with_value(|min| OrderDraft::new(ps, min)));
            draft.set(fresh);
            wizard.update(Wizard::reset);
        }
    };

    let steps = OrderDraft::STEP_TITLES
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let jump = move |_| {
                let form = draft.get_untracked();
                wizard.update(|w| {
                    w.go_to(i, &form);
                });
            };
            view! {
                <li
                    class="wizard__step"
                    class:wizard__step--current=move || current.get() == i
                    class:wizard__step--done=move || i < current.get()
                >
                    <button on:click=jump>
                        <span class="wizard__step-number">{i + 1}</span>
                        <span>{*title}</span>
                    </button>
                </li>
            }
        })
        .collect_view();

    let step_body = move || match current.get() {
        STEP_CLIENT => view! { <ClientStep draft=draft clients=clients /> }.into_any(),
        STEP_PRODUCTS => view! { <ProductsStep draft=draft products=products /> }.into_any(),
        STEP_DELIVERY => view! { <DeliveryStep draft=draft distributors=distributors /> }.into_any(),
        _ => view! { <ReviewStep draft=draft clients=clients distributors=distributors products=products /> }
            .into_any(),
    };

    view! {
        <div class="wizard">
            <ol class="wizard__steps">{steps}</ol>
            <div class="wizard__progress">
                <div
                    class="wizard__progress-bar"
                    style=move || format!("width: {}%", wizard.with(Wizard::progress_percent::<OrderDraft>))
                ></div>
            </div>
            <h2 class="wizard__title">{move || wizard.with(Wizard::title::<OrderDraft>)}</h2>
            <Show when=move || wizard.with(|w| !w.errors.is_empty())>
                <ul class="form-errors">
                    {move || {
                        wizard
                            .with(|w| w.errors.clone())
                            .into_iter()
                            .map(|e| view! { <li>{e}</li> })
                            .collect_view()
                    }}
                </ul>
            </Show>
            <div class="wizard__body">{step_body}</div>
            <div class="wizard__nav">
                <button class="btn btn--secondary" disabled=move || wizard.with(Wizard::is_first) on:click=back>
                    "Back"
                </button>
                <Show
                    when=move || wizard.with(Wizard::is_last::<OrderDraft>)
                    fallback=move || view! { <button class="btn btn--primary" on:click=next>"Next"</button> }
                >
                    <button class="btn btn--primary" on:click=submit>"Place order"</button>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn ClientStep(draft: RwSignal<OrderDraft>, clients: StoredValue<Vec<Client>>) -> impl IntoView {
    let on_change = move |ev| {
        let id = event_target_value(&ev);
        let address = clients.with_value(|cs| {
            cs.iter()
                .find(|c| c.id == id)
                .map(|c| format!("{}, {}", c.address, c.city))
        });
        draft.update(|d| {
            d.client_id = id;
            if d.address.trim().is_empty() {
                d.address = address.unwrap_or_default();
            }
        });
    };

    view! {
        <label class="field">
            <span>"Client"</span>
            <select prop:value=move || draft.with(|d| d.client_id.clone()) on:change=on_change>
                <option value="">"Select a client"</option>
                {clients.with_value(|cs| {
                    cs.iter()
                        .filter(|c| c.status == AccountStatus::Active)
                        .map(|c| view! { <option value=c.id.clone()>{format!("{} ({})", c.name, c.city)}</option> })
                        .collect_view()
                })}
            </select>
        </label>
    }
}

#[component]
fn ProductsStep(draft: RwSignal<OrderDraft>, products: StoredValue<Vec<Product>>) -> impl IntoView {
    let line_count = Memo::new(move |_| draft.with(|d| d.lines.len()));

    let rows = move || {
        (0..line_count.get())
            .map(|i| {
                let line_total = move || {
                    draft.with(|d| {
                        let line = d.lines.get(i)?;
                        let qty = line.quantity.trim().parse::<i64>().ok()?;
                        let price = products.with_value(|ps| find_product(ps, &line.product_id).map(|p| p.price_cents))?;
                        Some(money(qty * price))
                    })
                    .unwrap_or_default()
                };
                view! {
                    <div class="line-row">
                        <select
                            prop:value=move || draft.with(|d| d.lines.get(i).map(|l| l.product_id.clone()).unwrap_or_default())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| {
                                    if let Some(l) = d.lines.get_mut(i) {
                                        l.product_id = value;
                                    }
                                });
                            }
                        >
                            <option value="">"Select a product"</option>
                            {products.with_value(|ps| {
                                ps.iter()
                                    .map(|p| view! {
                                        <option value=p.id.clone()>{format!("{} ({} / {})", p.name, money(p.price_cents), p.unit)}</option>
                                    })
                                    .collect_view()
                            })}
                        </select>
                        <input
                            type="number"
                            min="1"
                            placeholder="Qty"
                            prop:value=move || draft.with(|d| d.lines.get(i).map(|l| l.quantity.clone()).unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| {
                                    if let Some(l) = d.lines.get_mut(i) {
                                        l.quantity = value;
                                    }
                                });
                            }
                        />
                        <span class="line-row__total">{line_total}</span>
                        <button
                            class="btn btn--icon"
                            title="Remove line"
                            on:click=move |_| draft.update(|d| d.remove_line(i))
                        >
                            "✕"
                        </button>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="lines">
            {rows}
            <button class="btn btn--link" on:click=move |_| draft.update(OrderDraft::add_line)>
                "+ Add product"
            </button>
        </div>
    }
}

#[component]
fn DeliveryStep(draft: RwSignal<OrderDraft>, distributors: StoredValue<Vec<Distributor>>) -> impl IntoView {
    view! {
        <div class="form-grid">
            <label class="field">
                <span>"Delivery date"</span>
                <input
                    type="date"
                    min=move || draft.with(|d| d.min_delivery_date.clone())
                    prop:value=move || draft.with(|d| d.delivery_date.clone())
                    on:input=move |ev| draft.update(|d| d.delivery_date = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Time slot"</span>
                <select
                    prop:value=move || draft.with(|d| d.time_slot.clone())
                    on:change=move |ev| draft.update(|d| d.time_slot = event_target_value(&ev))
                >
                    <option value="">"Select a slot"</option>
                    {TIME_SLOTS.iter().map(|slot| view! { <option value=*slot>{*slot}</option> }).collect_view()}
                </select>
            </label>
            <label class="field field--wide">
                <span>"Delivery address"</span>
                <input
                    type="text"
                    prop:value=move || draft.with(|d| d.address.clone())
                    on:input=move |ev| draft.update(|d| d.address = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Distributor"</span>
                <select
                    prop:value=move || draft.with(|d| d.distributor_id.clone())
                    on:change=move |ev| draft.update(|d| d.distributor_id = event_target_value(&ev))
                >
                    <option value="">"Select a distributor"</option>
                    {distributors.with_value(|ds| {
                        ds.iter()
                            .filter(|d| d.status == AccountStatus::Active)
                            .map(|d| view! { <option value=d.id.clone()>{format!("{} ({})", d.name, d.zone)}</option> })
                            .collect_view()
                    })}
                </select>
            </label>
            <label class="field field--wide">
                <span>"Notes"</span>
                <textarea
                    prop:value=move || draft.with(|d| d.notes.clone())
                    on:input=move |ev| draft.update(|d| d.notes = event_target_value(&ev))
                ></textarea>
            </label>
        </div>
    }
}

#[component]
fn ReviewStep(
    draft: RwSignal<OrderDraft>,
    clients: StoredValue<Vec<Client>>,
    distributors: StoredValue<Vec<Distributor>>,
    products: StoredValue<Vec<Product>>,
) -> impl IntoView {
    let preview: Order = products.with_value(|ps| draft.with(|d| d.to_order("", "", ps)));
    let d = draft.get_untracked();
    let notes = d.notes.trim().to_owned();
    let client = clients.with_value(|cs| client_name(cs, &d.client_id));
    let distributor = distributors.with_value(|ds| distributor_name(ds, Some(d.distributor_id.as_str())));
    let lines = products.with_value(|ps| {
        preview
            .lines
            .iter()
            .map(|l| {
                let name = find_product(ps, &l.product_id).map_or_else(|| l.product_id.clone(), |p| p.name.clone());
                view! {
                    <tr>
                        <td>{name}</td>
                        <td class="num">{l.quantity}</td>
                        <td class="num">{money(l.unit_price_cents)}</td>
                        <td class="num">{money(l.total_cents())}</td>
                    </tr>
                }
            })
            .collect_view()
    });

    view! {
        <dl class="review">
            <dt>"Client"</dt>
            <dd>{client}</dd>
            <dt>"Delivery"</dt>
            <dd>{format!("{} · {}", d.delivery_date, d.time_slot)}</dd>
            <dt>"Address"</dt>
            <dd>{d.address.clone()}</dd>
            <dt>"Distributor"</dt>
            <dd>{distributor}</dd>
        </dl>
        <table class="table">
            <thead>
                <tr>
                    <th>"Product"</th>
                    <th class="num">"Qty"</th>
                    <th class="num">"Unit price"</th>
                    <th class="num">"Total"</th>
                </tr>
            </thead>
            <tbody>{lines}</tbody>
            <tfoot>
                <tr>
                    <td colspan="3">"Order total"</td>
                    <td class="num">{money(preview.total_cents())}</td>
                </tr>
            </tfoot>
        </table>
        {(!notes.is_empty()).then(|| view! { <p class="review__notes">{notes}</p> })}
    }
}
