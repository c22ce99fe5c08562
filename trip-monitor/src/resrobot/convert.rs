//! Conversion from ResRobot DTOs to domain types.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::warn;

use crate::domain::{PageToken, StopCandidate, StopId, Trip, TripPage};

use super::types::{LegStop, LocationResponse, TripDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse a date or time string
    #[error("invalid date/time: {0}")]
    InvalidTime(String),

    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Convert a `location.name` response to stop candidates.
///
/// Coordinate locations and stops without a usable external ID are
/// dropped. Order is preserved, so the best match stays first.
pub fn convert_locations(response: &LocationResponse) -> Vec<StopCandidate> {
    response
        .locations
        .iter()
        .filter_map(|entry| entry.stop_location.as_ref())
        .filter_map(|stop| {
            let ext_id = stop.ext_id.clone()?;
            let id = StopId::new(ext_id).ok()?;
            Some(StopCandidate::new(id, stop.name.clone()))
        })
        .collect()
}

/// Convert a page of trips.
///
/// Trips that cannot be converted are logged and skipped rather than
/// failing the whole page.
pub fn convert_trip_page(trips: &[TripDto], scroll_forward: Option<&str>) -> TripPage {
    let mut results = Vec::with_capacity(trips.len());

    for dto in trips {
        match convert_trip(dto) {
            Ok(trip) => results.push(trip),
            Err(e) => warn!(error = %e, "Skipping trip"),
        }
    }

    TripPage::new(results, scroll_forward.map(PageToken::new))
}

/// Convert a single trip, described by its first leg.
pub fn convert_trip(dto: &TripDto) -> Result<Trip, ConversionError> {
    let leg = dto
        .leg_list
        .legs
        .first()
        .ok_or(ConversionError::MissingField("LegList.Leg"))?;

    let line = leg
        .products
        .first()
        .and_then(|p| p.num.clone())
        .ok_or(ConversionError::MissingField("Product.num"))?;

    let departure = parse_datetime(&leg.origin)?;

    Ok(Trip::new(
        line,
        departure,
        leg.origin.name.clone(),
        leg.destination.name.clone(),
    ))
}

/// Parse the local date and time of a leg stop.
fn parse_datetime(stop: &LegStop) -> Result<NaiveDateTime, ConversionError> {
    let date = NaiveDate::parse_from_str(&stop.date, "%Y-%m-%d")
        .map_err(|_| ConversionError::InvalidTime(stop.date.clone()))?;
    let time = NaiveTime::parse_from_str(&stop.time, "%H:%M:%S")
        .map_err(|_| ConversionError::InvalidTime(stop.time.clone()))?;
    Ok(date.and_time(time))
}
