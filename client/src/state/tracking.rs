//! Simulated live positions for in-transit deliveries.
//!
//! Each route moves linearly from the distributor's depot to the client in
//! `total_steps` ticks. The page drives `tick` from a one-second interval and
//! drops the interval once `is_finished` reports true.

#[cfg(test)]
#[path = "tracking_test.rs"]
mod tracking_test;

use crate::data::types::{Client, Delivery, DeliveryStatus, Distributor, GeoPoint};

/// Ticks from depot to doorstep.
pub const TRACKING_STEPS: u32 = 30;

/// Interval between ticks.
pub const TRACKING_TICK_MS: u32 = 1_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub delivery_id: String,
    pub label: String,
    pub from: GeoPoint,
    pub to: GeoPoint,
}

/// Build routes for every in-transit delivery whose endpoints are known.
pub fn in_transit_routes(deliveries: &[Delivery], clients: &[Client], distributors: &[Distributor]) -> Vec<Route> {
    deliveries
        .iter()
        .filter(|d| d.status == DeliveryStatus::InTransit)
        .filter_map(|d| {
            let client = clients.iter().find(|c| c.id == d.client_id)?;
            let distributor = distributors.iter().find(|x| x.id == d.distributor_id)?;
            Some(Route {
                delivery_id: d.id.clone(),
                label: format!("{} → {}", distributor.name, client.name),
                from: distributor.depot,
                to: client.location,
            })
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackingSimulation {
    pub routes: Vec<Route>,
    pub step: u32,
    pub total_steps: u32,
}

impl TrackingSimulation {
    pub fn new(routes: Vec<Route>, total_steps: u32) -> Self {
        Self { routes, step: 0, total_steps: total_steps.max(1) }
    }

    /// Advance one tick. Returns `false` once the simulation has finished.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.step += 1;
        true
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.total_steps
    }

    pub fn progress(&self) -> f64 {
        f64::from(self.step) / f64::from(self.total_steps)
    }

    /// Current marker per route as `(delivery_id, position)`.
    pub fn positions(&self) -> Vec<(String, GeoPoint)> {
        let t = self.progress();
        self.routes
            .iter()
            .map(|r| (r.delivery_id.clone(), lerp(r.from, r.to, t)))
            .collect()
    }

    pub fn restart(&mut self) {
        self.step = 0;
    }
}

fn lerp(a: GeoPoint, b: GeoPoint, t: f64) -> GeoPoint {
    GeoPoint { lat: a.lat + (b.lat - a.lat) * t, lng: a.lng + (b.lng - a.lng) * t }
}

/// Lat/lng window shown by the map panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl MapBounds {
    /// Smallest window covering every point, padded by `pad` degrees.
    pub fn covering(points: impl IntoIterator<Item = GeoPoint>, pad: f64) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut b = Self { min_lat: first.lat, max_lat: first.lat, min_lng: first.lng, max_lng: first.lng };
        for p in it {
            b.min_lat = b.min_lat.min(p.lat);
            b.max_lat = b.max_lat.max(p.lat);
            b.min_lng = b.min_lng.min(p.lng);
            b.max_lng = b.max_lng.max(p.lng);
        }
        b.min_lat -= pad;
        b.max_lat += pad;
        b.min_lng -= pad;
        b.max_lng += pad;
        Some(b)
    }
}

/// Map a coordinate into an SVG viewport; north is up.
pub fn project(point: GeoPoint, bounds: MapBounds, width: f64, height: f64) -> (f64, f64) {
    let span_lng = (bounds.max_lng - bounds.min_lng).max(f64::EPSILON);
    let span_lat = (bounds.max_lat - bounds.min_lat).max(f64::EPSILON);
    let x = (point.lng - bounds.min_lng) / span_lng * width;
    let y = (bounds.max_lat - point.lat) / span_lat * height;
    (x, y)
}
