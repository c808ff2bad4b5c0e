use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use estate_finance_core::mortgage::{self, MortgageBounds, MortgageInput};
use estate_finance_core::proximity::{self, GeoPoint, NearbyInput};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Optional bounds travel alongside the input so the page can pass the
/// same slider ranges it renders.
#[derive(Deserialize)]
struct MortgageRequest {
    #[serde(flatten)]
    input: MortgageInput,
    #[serde(default)]
    bounds: Option<MortgageBounds>,
}

#[derive(Deserialize)]
struct DistanceRequest {
    from: GeoPoint,
    to: GeoPoint,
}

// ---------------------------------------------------------------------------
// Mortgage
// ---------------------------------------------------------------------------

#[napi]
pub fn mortgage_breakdown(input_json: String) -> NapiResult<String> {
    let request: MortgageRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let bounds = request.bounds.unwrap_or_default();
    bounds.validate().map_err(to_napi_error)?;
    let output = mortgage::calculate_mortgage_with_bounds(&request.input, &bounds)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn clamp_mortgage_input(input_json: String) -> NapiResult<String> {
    let request: MortgageRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let bounds = request.bounds.unwrap_or_default();
    bounds.validate().map_err(to_napi_error)?;
    serde_json::to_string(&bounds.clamp(&request.input)).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Proximity
// ---------------------------------------------------------------------------

#[napi]
pub fn nearby_establishments(input_json: String) -> NapiResult<String> {
    let input: NearbyInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = proximity::find_nearby(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn haversine_distance_km(input_json: String) -> NapiResult<f64> {
    let request: DistanceRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    proximity::distance_km(request.from, request.to).map_err(to_napi_error)
}
