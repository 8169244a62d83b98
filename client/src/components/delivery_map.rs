//! Live delivery tracking map drawn as SVG.
//!
//! Markers move from depot to client over `TRACKING_STEPS` ticks. The ticker
//! is a `spawn_local` sleep loop that stops when the simulation finishes or
//! the component is cleaned up.

use leptos::prelude::*;

use crate::data::types::GeoPoint;
use crate::state::tracking::{MapBounds, Route, TRACKING_STEPS, TrackingSimulation, project};

const MAP_WIDTH: f64 = 640.0;
const MAP_HEIGHT: f64 = 400.0;
const MAP_PAD_DEG: f64 = 0.05;

#[component]
pub fn DeliveryMap(routes: Vec<Route>) -> impl IntoView {
    let Some(bounds) = MapBounds::covering(routes.iter().flat_map(|r| [r.from, r.to]), MAP_PAD_DEG) else {
        return view! { <p class="map__empty">"No deliveries in transit."</p> }.into_any();
    };
    let sim = RwSignal::new(TrackingSimulation::new(routes.clone(), TRACKING_STEPS));
    let running = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let alive = {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let flag = alive.clone();
        on_cleanup(move || flag.store(false, std::sync::atomic::Ordering::Relaxed));
        alive
    };

    let start = move || {
        if running.get_untracked() {
            return;
        }
        running.set(true);
        #[cfg(feature = "hydrate")]
        {
            use crate::state::tracking::TRACKING_TICK_MS;
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(TRACKING_TICK_MS))).await;
                    if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                        break;
                    }
                    if !sim.try_update(TrackingSimulation::tick).unwrap_or(false) {
                        break;
                    }
                }
                running.try_set(false);
            });
        }
    };
    start();

    let restart = move |_| {
        sim.update(TrackingSimulation::restart);
        start();
    };

    let to_xy = move |p: GeoPoint| project(p, bounds, MAP_WIDTH, MAP_HEIGHT);

    let paths = routes
        .iter()
        .map(|r| {
            let (x1, y1) = to_xy(r.from);
            let (x2, y2) = to_xy(r.to);
            view! {
                <g class="map__route">
                    <line class="map__path" x1=x1 y1=y1 x2=x2 y2=y2 />
                    <rect class="map__depot" x={x1 - 5.0} y={y1 - 5.0} width="10" height="10" />
                    <circle class="map__client" cx=x2 cy=y2 r="6" />
                    <text class="map__label" x={x2 + 9.0} y={y2 + 4.0}>{r.label.clone()}</text>
                </g>
            }
        })
        .collect_view();

    let markers = move || {
        sim.with(TrackingSimulation::positions)
            .into_iter()
            .map(|(id, point)| {
                let (cx, cy) = to_xy(point);
                view! {
                    <g class="map__truck">
                        <circle cx=cx cy=cy r="7" />
                        <text class="map__truck-label" x={cx + 9.0} y={cy - 9.0}>{id}</text>
                    </g>
                }
            })
            .collect_view()
    };

    view! {
        <section class="card map">
            <div class="map__header">
                <h2 class="card__title">"Live tracking"</h2>
                <span class="map__progress">
                    {move || format!("{:.0}%", sim.with(TrackingSimulation::progress) * 100.0)}
                </span>
                <button class="btn btn--secondary" disabled=move || running.get() on:click=restart>
                    "Replay"
                </button>
            </div>
            <svg class="map__canvas" viewBox={format!("0 0 {MAP_WIDTH} {MAP_HEIGHT}")} role="img">
                {paths}
                {markers}
            </svg>
        </section>
    }
    .into_any()
}
