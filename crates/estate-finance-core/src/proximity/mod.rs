pub mod geo;
pub mod nearby;

pub use geo::{distance_km, haversine_km, GeoPoint, EARTH_RADIUS_KM};
pub use nearby::{
    find_nearby, Establishment, EstablishmentKind, LookupSource, NearbyEstablishment,
    NearbyInput, NearbyOutput,
};
