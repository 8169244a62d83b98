//! Dashboard weather card with cold-chain advisory.

use leptos::prelude::*;

use crate::net::weather::{Weather, WeatherConfig};
#[cfg(feature = "hydrate")]
use crate::net::weather::{cold_chain_advisory, fetch_weather};
#[cfg(feature = "hydrate")]
use crate::util::notify::use_notifier;

#[component]
pub fn WeatherWidget() -> impl IntoView {
    let config = WeatherConfig::from_build_env();
    let weather = RwSignal::new(None::<Weather>);

    #[cfg(feature = "hydrate")]
    {
        let notifier = use_notifier();
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let reading = fetch_weather(&config).await;
            if let Some(advisory) = cold_chain_advisory(&reading) {
                notifier.notify_once(advisory);
            }
            weather.try_set(Some(reading));
        });
    }

    let city = config.city;
    view! {
        <section class="card weather">
            <h2 class="card__title">"Weather"</h2>
            {move || match weather.get() {
                None => view! { <p class="weather__loading">{format!("Loading weather for {city}...")}</p> }.into_any(),
                Some(w) => {
                    let fallback = w.is_fallback;
                    view! {
                        <div class="weather__body">
                            <img class="weather__icon" src=w.icon_url() alt=w.description.clone() />
                            <div>
                                <div class="weather__temp">{format!("{:.0} °C", w.temperature_c)}</div>
                                <div class="weather__city">{w.city.clone()}</div>
                                <div class="weather__desc">{w.description.clone()}</div>
                            </div>
                            <dl class="weather__meta">
                                <dt>"Humidity"</dt>
                                <dd>{format!("{}%", w.humidity)}</dd>
                                <dt>"Wind"</dt>
                                <dd>{format!("{:.1} m/s", w.wind_speed)}</dd>
                            </dl>
                        </div>
                        <Show when=move || fallback>
                            <p class="weather__note">"Live weather unavailable; showing typical conditions."</p>
                        </Show>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}
