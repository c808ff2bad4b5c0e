use clap::Args;
use serde_json::{json, Value};
use std::time::Instant;

use estate_finance_core::proximity::{self, GeoPoint, NearbyInput};
use estate_finance_core::with_precision;

use crate::input;

/// Arguments for a nearby-establishments search
#[derive(Args)]
pub struct NearbyArgs {
    /// Path to JSON input file with origin, radius and candidates
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for a point-to-point distance
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct DistanceArgs {
    #[arg(long)]
    pub from_lat: f64,
    #[arg(long)]
    pub from_lng: f64,
    #[arg(long)]
    pub to_lat: f64,
    #[arg(long)]
    pub to_lng: f64,
}

pub fn run_nearby(args: NearbyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let nearby_input: NearbyInput = input::read_input(args.input.as_deref())?
        .ok_or("--input <file.json> or stdin required for nearby search")?;

    tracing::debug!(
        candidates = nearby_input.candidates.len(),
        fallback = nearby_input.fallback.len(),
        radius_km = nearby_input.radius_km,
        "searching nearby establishments"
    );

    let result = proximity::find_nearby(&nearby_input)?;
    tracing::debug!(
        source = ?result.result.source,
        found = result.result.total_found,
        "nearby search complete"
    );
    Ok(serde_json::to_value(result)?)
}

pub fn run_distance(args: DistanceArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let from = GeoPoint::new(args.from_lat, args.from_lng);
    let to = GeoPoint::new(args.to_lat, args.to_lng);
    let distance_km = proximity::distance_km(from, to)?;
    let output = with_precision(
        "Haversine great-circle distance (spherical Earth, R = 6371 km)",
        &json!({ "from": from, "to": to }),
        Vec::new(),
        start.elapsed().as_micros() as u64,
        "f64",
        json!({ "distance_km": distance_km }),
    );
    Ok(serde_json::to_value(output)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(from: (f64, f64), to: (f64, f64)) -> DistanceArgs {
        DistanceArgs {
            from_lat: from.0,
            from_lng: from.1,
            to_lat: to.0,
            to_lng: to.1,
        }
    }

    #[test]
    fn test_distance_is_rounded_to_two_decimals() {
        let out = run_distance(args((5.6037, -0.1870), (6.6885, -1.6244))).unwrap();
        let km = out["result"]["distance_km"].as_f64().unwrap();
        assert_eq!((km * 100.0).round() / 100.0, km);
        assert_eq!(out["metadata"]["precision"], "f64");
    }

    #[test]
    fn test_distance_rejects_bad_latitude() {
        let err = run_distance(args((95.0, 0.0), (0.0, 0.0))).unwrap_err();
        assert!(err.to_string().contains("from.lat"));
    }
}
