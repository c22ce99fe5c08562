//! The trip monitor.
//!
//! Keeps a small buffer of upcoming trips for a set of routes and only asks
//! the trip planner for more when the buffer runs low, so `refresh` can be
//! called as often as the caller likes.

use chrono::{Duration, Local, NaiveDateTime};
use tracing::{debug, error, info, warn};

use crate::domain::{PageToken, Trip};

use super::blacklist::Blacklist;
use super::config::MonitorConfig;
use super::provider::{StopResolver, TripFetcher};
use super::routes::{Route, RouteRegistry};
use super::stops::StopCache;
use super::trips::TripCache;

/// What a single [`TripMonitor::refresh`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    /// Trips removed by the initial purge.
    pub purged: usize,
    /// Calls made to the trip fetcher, failed ones included.
    pub fetches: usize,
    /// Fetcher calls that failed.
    pub fetch_failures: usize,
    /// Trips added to the cache.
    pub added: usize,
}

/// Monitors upcoming trips between named stops.
///
/// Owns all monitor state. Every mutating method takes `&mut self`, so a
/// monitor shared between tasks has to be wrapped in a lock by the caller.
pub struct TripMonitor<R, F> {
    config: MonitorConfig,
    resolver: R,
    fetcher: F,
    stops: StopCache,
    routes: RouteRegistry,
    blacklist: Blacklist,
    trips: TripCache,
}

impl<R: StopResolver, F: TripFetcher> TripMonitor<R, F> {
    /// Create a monitor with no routes and an empty cache.
    pub fn new(config: MonitorConfig, resolver: R, fetcher: F) -> Self {
        Self {
            config,
            resolver,
            fetcher,
            stops: StopCache::new(),
            routes: RouteRegistry::new(),
            blacklist: Blacklist::new(),
            trips: TripCache::new(),
        }
    }

    /// Add a route to monitor.
    ///
    /// Both stop names are resolved (or taken from the stop cache). Returns
    /// false if either cannot be resolved, in which case neither the route
    /// nor any newly resolved stop is recorded.
    ///
    /// Adding the same route twice registers it twice.
    pub async fn add_route(&mut self, origin: &str, destination: &str) -> bool {
        let origin_id = match self.stops.find(origin, &self.resolver).await {
            Ok(id) => id,
            Err(e) => {
                warn!(stop = origin, error = %e, "Could not resolve origin");
                error!(origin, destination, "Failed to add route");
                return false;
            }
        };

        // The origin is only cached once the destination has resolved too
        if destination != origin {
            if let Err(e) = self.stops.resolve(destination, &self.resolver).await {
                warn!(stop = destination, error = %e, "Could not resolve destination");
                error!(origin, destination, "Failed to add route");
                return false;
            }
        }

        self.stops.insert(origin, origin_id);
        self.routes.push(Route::new(origin, destination));
        debug!(origin, destination, routes = self.routes.len(), "Added route");
        true
    }

    /// Never show trips on `line`.
    pub fn blacklist_line(&mut self, line: &str) {
        if self.blacklist.insert(line) {
            debug!(line, "Blacklisted line");
        }
    }

    /// Remove cached trips leaving within the linger time, using the current
    /// local time. Returns the number of trips removed.
    pub fn purge(&mut self) -> usize {
        self.purge_at(local_now())
    }

    /// Like [`purge`](Self::purge), as seen from `now`.
    pub fn purge_at(&mut self, now: NaiveDateTime) -> usize {
        let removed = self
            .trips
            .remove_unreachable(now, self.config.linger_time());

        for trip in &removed {
            debug!(line = %trip.line, departure = %trip.departure, "Purging trip");
        }
        removed.len()
    }

    /// Purge, then top the cache up from the trip planner if it holds fewer
    /// trips than the low-water mark.
    pub async fn refresh(&mut self) -> RefreshReport {
        self.refresh_at(local_now()).await
    }

    /// Like [`refresh`](Self::refresh), as seen from `now`.
    ///
    /// `now` is the single cutoff for the whole pass. Admission does not
    /// re-read the clock after network calls.
    pub async fn refresh_at(&mut self, now: NaiveDateTime) -> RefreshReport {
        let mut report = RefreshReport {
            purged: self.purge_at(now),
            ..RefreshReport::default()
        };

        let mut token: Option<PageToken> = None;
        let mut pages = 0;

        loop {
            if self.trips.len() >= self.config.low_water_mark {
                debug!(trips = self.trips.len(), "Enough trips cached, not fetching");
                break;
            }

            let next = self.fetch_page(token.as_ref(), now, &mut report).await;
            pages += 1;

            // Inherited limitation: only the last route's continuation token
            // is followed, so earlier routes never get a second page.
            token = next;
            if token.is_none() || pages >= self.config.max_pages {
                break;
            }
        }

        report
    }

    /// Fetch one page for every route and admit what survives filtering.
    ///
    /// Returns the last route's continuation token.
    async fn fetch_page(
        &mut self,
        token: Option<&PageToken>,
        now: NaiveDateTime,
        report: &mut RefreshReport,
    ) -> Option<PageToken> {
        let linger = self.config.linger_time();
        let mut next = None;

        for route in self.routes.iter() {
            let (Some(origin), Some(destination)) = (
                self.stops.get(&route.origin),
                self.stops.get(&route.destination),
            ) else {
                // add_route only registers resolved routes
                continue;
            };

            report.fetches += 1;
            let page = match self.fetcher.trips(origin, destination, token).await {
                Ok(page) => page,
                Err(e) => {
                    warn!(
                        origin = %route.origin,
                        destination = %route.destination,
                        error = %e,
                        "Failed to fetch trips, skipping route"
                    );
                    report.fetch_failures += 1;
                    next = None;
                    continue;
                }
            };

            for trip in page.trips {
                if admit(&self.blacklist, &mut self.trips, trip, now, linger) {
                    report.added += 1;
                }
            }
            next = page.next;
        }

        next
    }

    /// Iterate cached trips in the order they were added.
    ///
    /// The iterator borrows the monitor, so the cache cannot change while it
    /// is alive. Call again to start over.
    pub fn dump(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    /// Log every cached trip at info level.
    pub fn log_dump(&self) {
        for trip in self.dump() {
            info!(
                line = %trip.line,
                departure = %trip.departure,
                origin = %trip.origin,
                destination = %trip.destination,
                "{trip}"
            );
        }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn stops(&self) -> &StopCache {
        &self.stops
    }

    pub fn routes(&self) -> &RouteRegistry {
        &self.routes
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    /// Number of cached trips.
    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

/// Add `trip` to `trips` unless it is blacklisted, already cached, or leaves
/// too soon. Returns whether it was added.
fn admit(
    blacklist: &Blacklist,
    trips: &mut TripCache,
    trip: Trip,
    now: NaiveDateTime,
    linger: Duration,
) -> bool {
    if blacklist.contains(&trip.line) {
        debug!(line = %trip.line, departure = %trip.departure, "Ignoring blacklisted line");
        return false;
    }

    if trips.contains(&trip) {
        debug!(line = %trip.line, departure = %trip.departure, "Ignoring duplicate trip");
        return false;
    }

    if !trip.is_reachable(now, linger) {
        warn!(line = %trip.line, departure = %trip.departure, "Ignoring trip leaving too soon");
        return false;
    }

    debug!(
        line = %trip.line,
        destination = %trip.destination,
        departure = %trip.departure,
        "Adding trip"
    );
    trips.push(trip);
    true
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
