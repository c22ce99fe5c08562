//! Trip monitoring.
//!
//! The monitor keeps a buffer of upcoming trips for a set of routes:
//!
//! 1. Stop names are resolved once and cached.
//! 2. Each refresh purges trips the user can no longer catch.
//! 3. If fewer than the low-water mark remain, every route is fetched again
//!    (with one continuation page by default), dropping blacklisted lines,
//!    duplicates and trips leaving within the linger time.

mod blacklist;
mod config;
mod provider;
mod routes;
mod stops;
mod trip_monitor;
mod trips;


pub use blacklist::Blacklist;
pub use config::{DEFAULT_LOW_WATER_MARK, DEFAULT_MAX_PAGES, MAX_LINGER_MINS, MonitorConfig};
pub use provider::{MonitorError, StopResolver, TripFetcher};
pub use routes::{Route, RouteRegistry};
pub use stops::StopCache;
pub use trip_monitor::{RefreshReport, TripMonitor};
pub use trips::TripCache;
