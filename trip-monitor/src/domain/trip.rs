//! Trip and trip page types.

use std::fmt;

use chrono::{Duration, NaiveDateTime};

/// One concrete scheduled departure on a line between two named stops.
///
/// Equality is structural over all four fields, down to the second of the
/// departure time. Two candidates that agree on everything are the same trip,
/// no matter which route or page they came from.
///
/// Departure times are naive local times, matching what the trip planner
/// reports for the stop.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Trip {
    /// Line identifier as shown to passengers (e.g. "171").
    pub line: String,
    /// Scheduled departure from the origin stop.
    pub departure: NaiveDateTime,
    /// Name of the stop the trip departs from.
    pub origin: String,
    /// Name of the stop the trip arrives at.
    pub destination: String,
}

impl Trip {
    /// Create a new trip.
    pub fn new(
        line: impl Into<String>,
        departure: NaiveDateTime,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            line: line.into(),
            departure,
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Time left until departure as seen from `now`. Negative once departed.
    pub fn time_until_departure(&self, now: NaiveDateTime) -> Duration {
        self.departure - now
    }

    /// Whether the trip leaves strictly later than `linger` from `now`.
    ///
    /// A trip leaving in exactly `linger` is not reachable.
    pub fn is_reachable(&self, now: NaiveDateTime, linger: Duration) -> bool {
        self.time_until_departure(now) > linger
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} line {} {} -> {}",
            self.departure.format("%H:%M"),
            self.line,
            self.origin,
            self.destination
        )
    }
}

/// Opaque continuation marker for fetching the next page of a trip query.
///
/// ResRobot calls this `scrF` (scroll forward).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageToken(String);

impl PageToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of trips for a route query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripPage {
    /// Trips in the order the planner returned them.
    pub trips: Vec<Trip>,
    /// Token for the page after this one, if the planner offered one.
    pub next: Option<PageToken>,
}

impl TripPage {
    pub fn new(trips: Vec<Trip>, next: Option<PageToken>) -> Self {
        Self { trips, next }
    }
}
