#![cfg(feature = "proximity")]

use estate_finance_core::proximity::{
    find_nearby, haversine_km, Establishment, EstablishmentKind, GeoPoint, LookupSource,
    NearbyInput,
};

// Airport Residential Area, Accra
const ORIGIN: GeoPoint = GeoPoint {
    lat: 5.6060,
    lng: -0.1720,
};

fn establishment(name: &str, kind: EstablishmentKind, lat: f64, lng: f64) -> Establishment {
    Establishment {
        name: name.into(),
        kind,
        location: GeoPoint::new(lat, lng),
        address: Some("Accra".into()),
    }
}

fn input_json(body: &str) -> NearbyInput {
    serde_json::from_str(body).unwrap()
}

#[test]
fn test_json_round_trip_through_search() {
    let input = input_json(
        r#"{
            "origin": {"lat": 5.6060, "lng": -0.1720},
            "radius_km": 3,
            "kinds": ["school", "hospital"],
            "candidates": [
                {"name": "Ridge Hospital", "kind": "hospital", "location": {"lat": 5.5630, "lng": -0.2000}},
                {"name": "Airport School", "kind": "school", "location": {"lat": 5.6080, "lng": -0.1700}},
                {"name": "Marina Mall", "kind": "mall", "location": {"lat": 5.6070, "lng": -0.1730}}
            ]
        }"#,
    );

    let result = find_nearby(&input).unwrap();
    let out = &result.result;

    assert_eq!(out.source, LookupSource::Live);
    assert_eq!(out.total_found, 1);
    assert_eq!(out.results[0].name, "Airport School");
    assert_eq!(out.results[0].kind, EstablishmentKind::School);
}

#[test]
fn test_reported_distance_matches_haversine() {
    let target = establishment("Bank Branch", EstablishmentKind::Bank, 5.6150, -0.1800);
    let expected = haversine_km(ORIGIN, target.location);

    let input = NearbyInput {
        origin: ORIGIN,
        radius_km: 10.0,
        kinds: None,
        candidates: vec![target],
        fallback: vec![],
        limit: None,
    };

    let out = find_nearby(&input).unwrap().result;
    assert!((out.results[0].distance_km - expected).abs() < 0.005);
}

#[test]
fn test_ties_broken_by_name() {
    let input = NearbyInput {
        origin: ORIGIN,
        radius_km: 2.0,
        kinds: None,
        candidates: vec![
            establishment("Zeta Gym", EstablishmentKind::Gym, 5.6070, -0.1720),
            establishment("Alpha Gym", EstablishmentKind::Gym, 5.6070, -0.1720),
        ],
        fallback: vec![],
        limit: None,
    };

    let out = find_nearby(&input).unwrap().result;
    let names: Vec<&str> = out.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha Gym", "Zeta Gym"]);
}

#[test]
fn test_fallback_not_used_when_live_has_results() {
    let input = NearbyInput {
        origin: ORIGIN,
        radius_km: 2.0,
        kinds: None,
        candidates: vec![establishment(
            "Live Pharmacy",
            EstablishmentKind::Pharmacy,
            5.6065,
            -0.1720,
        )],
        fallback: vec![establishment(
            "Cached Pharmacy",
            EstablishmentKind::Pharmacy,
            5.6061,
            -0.1720,
        )],
        limit: None,
    };

    let out = find_nearby(&input).unwrap().result;
    assert_eq!(out.source, LookupSource::Live);
    assert_eq!(out.results.len(), 1);
    assert_eq!(out.results[0].name, "Live Pharmacy");
}

#[test]
fn test_empty_everywhere_warns() {
    let input = NearbyInput {
        origin: ORIGIN,
        radius_km: 1.0,
        kinds: Some(vec![EstablishmentKind::Other("embassy".into())]),
        candidates: vec![],
        fallback: vec![],
        limit: None,
    };

    let result = find_nearby(&input).unwrap();
    assert_eq!(result.result.total_found, 0);
    assert!(result.result.results.is_empty());
    assert_eq!(result.warnings.len(), 1);
}
