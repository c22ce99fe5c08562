//! ResRobot API response DTOs.
//!
//! These types map directly to the ResRobot v2.1 JSON responses. Only the
//! fields the monitor needs are modelled; everything else is ignored.

use serde::Deserialize;

/// Error body returned by ResRobot instead of a normal response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error_code: Option<String>,
    pub error_text: Option<String>,
}

/// Response from `location.name`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationResponse {
    /// Matching locations, best match first.
    ///
    /// Absent when nothing matched.
    #[serde(rename = "stopLocationOrCoordLocation", default)]
    pub locations: Vec<LocationEntry>,
}

/// One location entry: either a stop or a coordinate (address, POI).
#[derive(Debug, Clone, Deserialize)]
pub struct LocationEntry {
    #[serde(rename = "StopLocation")]
    pub stop_location: Option<StopLocation>,

    #[serde(rename = "CoordLocation")]
    pub coord_location: Option<CoordLocation>,
}

/// A stop returned by `location.name`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLocation {
    /// External stop ID, used as `originId`/`destId` in trip searches.
    pub ext_id: Option<String>,

    /// Full stop name, e.g. "Dalby busstation (Lund kn)".
    pub name: String,
}

/// A coordinate location (address or point of interest).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordLocation {
    pub name: Option<String>,
}

/// Response from `trip`.
#[derive(Debug, Clone, Deserialize)]
pub struct TripResponse {
    /// Suggested trips. Absent when the search found nothing.
    #[serde(rename = "Trip")]
    pub trips: Option<Vec<TripDto>>,

    /// Context for scrolling forwards (later trips).
    #[serde(rename = "scrF")]
    pub scroll_forward: Option<String>,
}

/// One suggested trip.
#[derive(Debug, Clone, Deserialize)]
pub struct TripDto {
    #[serde(rename = "LegList")]
    pub leg_list: LegList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegList {
    #[serde(rename = "Leg", default)]
    pub legs: Vec<Leg>,
}

/// One leg of a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct Leg {
    #[serde(rename = "Origin")]
    pub origin: LegStop,

    #[serde(rename = "Destination")]
    pub destination: LegStop,

    /// Products serving this leg. Empty for walking legs.
    #[serde(rename = "Product", default)]
    pub products: Vec<Product>,

    /// Leg type: "JNY" for a journey, "WALK" for walking, etc.
    #[serde(rename = "type")]
    pub leg_type: Option<String>,
}

/// Departure or arrival point of a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegStop {
    pub name: String,

    /// Local time, "HH:MM:SS".
    pub time: String,

    /// Local date, "YYYY-MM-DD".
    pub date: String,
}

/// Transport product (line) serving a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Display name, e.g. "Länstrafik - Buss 171".
    pub name: Option<String>,

    /// Line number, e.g. "171".
    pub num: Option<String>,
}
