//! ResRobot (Trafiklab) trip planner client.
//!
//! This module provides an HTTP client for the Swedish ResRobot v2.1 API
//! and implements the monitor's [`StopResolver`](crate::monitor::StopResolver)
//! and [`TripFetcher`](crate::monitor::TripFetcher) on top of it.
//!
//! Key characteristics of ResRobot:
//! - Stop lookup matches partial names and nearly always returns something
//! - Trip search returns every possible trip, including ones with changes
//! - Times are local Swedish time, split into separate date and time fields
//! - `scrF` in a trip response is the context for fetching later trips

mod client;
mod convert;
mod error;
mod provider;
mod types;

#[cfg(test)]
mod test_server;

pub use client::{ResRobotClient, ResRobotConfig};
pub use convert::{ConversionError, convert_locations, convert_trip, convert_trip_page};
pub use error::ResRobotError;
pub use types::{
    Leg, LegList, LegStop, LocationEntry, LocationResponse, Product, StopLocation, TripDto,
    TripResponse,
};
