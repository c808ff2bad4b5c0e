//! Nearby establishments around a listing.
//!
//! Candidates come from a live places lookup run by the caller; when that
//! lookup yields nothing inside the radius, a curated local fallback set is
//! searched instead. Results are ordered nearest first.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::EstateFinanceError;
use crate::proximity::geo::{haversine_km, round_km, GeoPoint};
use crate::types::{with_precision, ComputationOutput};
use crate::EstateFinanceResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Category of a point of interest near a property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstablishmentKind {
    School,
    Hospital,
    Supermarket,
    Bank,
    Restaurant,
    Pharmacy,
    GasStation,
    Mall,
    Gym,
    Other(String),
}

/// A point of interest with a known location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Establishment {
    pub name: String,
    pub kind: EstablishmentKind,
    pub location: GeoPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Where the returned establishments came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupSource {
    Live,
    Fallback,
}

/// Input for a radius search around a property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyInput {
    /// Property location
    pub origin: GeoPoint,
    /// Search radius in kilometres
    pub radius_km: f64,
    /// Restrict to these kinds (None = all kinds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kinds: Option<Vec<EstablishmentKind>>,
    /// Establishments returned by the live lookup
    #[serde(default)]
    pub candidates: Vec<Establishment>,
    /// Local data searched when no live candidate is in range
    #[serde(default)]
    pub fallback: Vec<Establishment>,
    /// Maximum number of results to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// An establishment annotated with its distance from the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyEstablishment {
    pub name: String,
    pub kind: EstablishmentKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub location: GeoPoint,
    /// Great-circle distance, rounded to 2 decimals
    pub distance_km: f64,
}

/// Result of a radius search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyOutput {
    pub source: LookupSource,
    /// Matches before `limit` was applied
    pub total_found: usize,
    pub results: Vec<NearbyEstablishment>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Find establishments within `radius_km` of the origin, nearest first.
pub fn find_nearby(input: &NearbyInput) -> EstateFinanceResult<ComputationOutput<NearbyOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let mut source = LookupSource::Live;
    let mut matches = collect_within_radius(input, &input.candidates);

    if matches.is_empty() && !input.fallback.is_empty() {
        let usable: Vec<Establishment> = input
            .fallback
            .iter()
            .enumerate()
            .filter_map(|(i, e)| match e.location.validate(&format!("fallback[{i}]")) {
                Ok(()) => Some(e.clone()),
                Err(err) => {
                    warnings.push(format!("Skipping fallback entry '{}': {err}", e.name));
                    None
                }
            })
            .collect();

        source = LookupSource::Fallback;
        matches = collect_within_radius(input, &usable);
        warnings.push(format!(
            "No live results within {} km; using local fallback data",
            input.radius_km
        ));
    }

    matches.sort_by(|a, b| {
        a.distance_km
            .total_cmp(&b.distance_km)
            .then_with(|| a.name.cmp(&b.name))
    });

    let total_found = matches.len();
    if let Some(limit) = input.limit {
        matches.truncate(limit);
    }

    if total_found == 0 {
        warnings.push(format!(
            "No establishments found within {} km",
            input.radius_km
        ));
    }

    let output = NearbyOutput {
        source,
        total_found,
        results: matches,
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_precision(
        "Haversine radius search (spherical Earth, R = 6371 km)",
        input,
        warnings,
        elapsed,
        "f64",
        output,
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_input(input: &NearbyInput) -> EstateFinanceResult<()> {
    input.origin.validate("origin")?;

    if !input.radius_km.is_finite() || input.radius_km <= 0.0 {
        return Err(EstateFinanceError::InvalidInput {
            field: "radius_km".into(),
            reason: "Radius must be a positive number of kilometres".into(),
        });
    }

    if input.limit == Some(0) {
        return Err(EstateFinanceError::InvalidInput {
            field: "limit".into(),
            reason: "Limit must be at least 1 when provided".into(),
        });
    }

    for (i, e) in input.candidates.iter().enumerate() {
        e.location.validate(&format!("candidates[{i}].location"))?;
    }

    Ok(())
}

fn collect_within_radius(
    input: &NearbyInput,
    establishments: &[Establishment],
) -> Vec<NearbyEstablishment> {
    establishments
        .iter()
        .filter(|e| match &input.kinds {
            Some(kinds) => kinds.contains(&e.kind),
            None => true,
        })
        .filter_map(|e| {
            let distance = haversine_km(input.origin, e.location);
            (distance <= input.radius_km).then(|| NearbyEstablishment {
                name: e.name.clone(),
                kind: e.kind.clone(),
                address: e.address.clone(),
                location: e.location,
                distance_km: round_km(distance),
            })
        })
        .collect()
}
