use super::*;
use crate::data::fixtures;

fn route(from: (f64, f64), to: (f64, f64)) -> Route {
    Route {
        delivery_id: "DLV-1".to_owned(),
        label: "a → b".to_owned(),
        from: GeoPoint { lat: from.0, lng: from.1 },
        to: GeoPoint { lat: to.0, lng: to.1 },
    }
}

#[test]
fn routes_only_for_in_transit_deliveries() {
    let routes = in_transit_routes(&fixtures::deliveries(), &fixtures::clients(), &fixtures::distributors());
    let ids = routes.iter().map(|r| r.delivery_id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["DLV-504", "DLV-506"]);
    assert!(routes[0].label.contains("Mini Market Nour"));
}

#[test]
fn routes_skip_unknown_endpoints() {
    let mut deliveries = fixtures::deliveries();
    for d in &mut deliveries {
        d.client_id = "C999".to_owned();
    }
    assert!(in_transit_routes(&deliveries, &fixtures::clients(), &fixtures::distributors()).is_empty());
}

#[test]
fn simulation_moves_linearly_and_stops() {
    let mut sim = TrackingSimulation::new(vec![route((0.0, 0.0), (10.0, 20.0))], 4);
    assert_eq!(sim.positions()[0].1, GeoPoint { lat: 0.0, lng: 0.0 });

    assert!(sim.tick());
    assert!(sim.tick());
    assert_eq!(sim.positions()[0].1, GeoPoint { lat: 5.0, lng: 10.0 });

    assert!(sim.tick());
    assert!(sim.tick());
    assert!(sim.is_finished());
    assert_eq!(sim.positions()[0].1, GeoPoint { lat: 10.0, lng: 20.0 });

    assert!(!sim.tick());
    assert_eq!(sim.step, 4);
}

#[test]
fn zero_steps_clamped_to_one() {
    let mut sim = TrackingSimulation::new(Vec::new(), 0);
    assert_eq!(sim.total_steps, 1);
    assert!(sim.tick());
    assert!(sim.is_finished());
    sim.restart();
    assert_eq!(sim.step, 0);
}

#[test]
fn bounds_cover_points_with_padding() {
    let b = MapBounds::covering(
        [GeoPoint { lat: 1.0, lng: 5.0 }, GeoPoint { lat: 3.0, lng: 2.0 }],
        0.5,
    )
    .unwrap();
    assert_eq!(b, MapBounds { min_lat: 0.5, max_lat: 3.5, min_lng: 1.5, max_lng: 5.5 });
    assert!(MapBounds::covering(Vec::new(), 0.1).is_none());
}

#[test]
fn project_puts_north_west_at_origin() {
    let b = MapBounds { min_lat: 0.0, max_lat: 10.0, min_lng: 0.0, max_lng: 20.0 };
    assert_eq!(project(GeoPoint { lat: 10.0, lng: 0.0 }, b, 400.0, 200.0), (0.0, 0.0));
    assert_eq!(project(GeoPoint { lat: 0.0, lng: 20.0 }, b, 400.0, 200.0), (400.0, 200.0));
    assert_eq!(project(GeoPoint { lat: 5.0, lng: 10.0 }, b, 400.0, 200.0), (200.0, 100.0));
}
