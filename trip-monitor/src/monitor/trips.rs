//! Cache of live trips.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};

use crate::domain::Trip;

/// Trips currently worth showing, in the order they were fetched.
///
/// The order is arrival order from the trip planner, not departure order.
/// No two cached trips are equal.
#[derive(Debug, Default)]
pub struct TripCache {
    trips: Vec<Trip>,
    index: HashSet<Trip>,
}

impl TripCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, trip: &Trip) -> bool {
        self.index.contains(trip)
    }

    /// Append a trip.
    ///
    /// Callers check [`contains`](Self::contains) first; pushing a duplicate
    /// is a bug.
    pub fn push(&mut self, trip: Trip) {
        let fresh = self.index.insert(trip.clone());
        debug_assert!(fresh, "duplicate trip inserted into cache: {trip}");
        if fresh {
            self.trips.push(trip);
        }
    }

    /// Remove every trip that is not reachable from `now` given `linger`,
    /// returning the removed trips in cache order.
    pub fn remove_unreachable(&mut self, now: NaiveDateTime, linger: Duration) -> Vec<Trip> {
        let (keep, removed): (Vec<Trip>, Vec<Trip>) = std::mem::take(&mut self.trips)
            .into_iter()
            .partition(|trip| trip.is_reachable(now, linger));

        for trip in &removed {
            self.index.remove(trip);
        }
        self.trips = keep;
        removed
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn trip(line: &str, h: u32, m: u32) -> Trip {
        Trip::new(line, at(h, m), "Dalby busstation", "Lund C")
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut cache = TripCache::new();
        cache.push(trip("171", 10, 30));
        cache.push(trip("171", 10, 10));
        cache.push(trip("169", 10, 20));

        let times: Vec<String> = cache
            .iter()
            .map(|t| t.departure.format("%H:%M").to_string())
            .collect();
        assert_eq!(times, vec!["10:30", "10:10", "10:20"]);
    }

    #[test]
    fn contains_is_structural() {
        let mut cache = TripCache::new();
        cache.push(trip("171", 10, 30));

        assert!(cache.contains(&trip("171", 10, 30)));
        assert!(!cache.contains(&trip("171", 10, 31)));
    }

    #[test]
    #[should_panic(expected = "duplicate trip")]
    fn duplicate_push_is_a_bug() {
        let mut cache = TripCache::new();
        cache.push(trip("171", 10, 30));
        cache.push(trip("171", 10, 30));
    }

    #[test]
    fn remove_unreachable_uses_one_cutoff() {
        let mut cache = TripCache::new();
        cache.push(trip("171", 10, 40));
        cache.push(trip("171", 10, 10));
        cache.push(trip("169", 10, 15));
        cache.push(trip("169", 10, 16));

        let removed = cache.remove_unreachable(at(10, 0), Duration::minutes(15));

        assert_eq!(removed, vec![trip("171", 10, 10), trip("169", 10, 15)]);
        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&trip("169", 10, 15)));

        // Removed trips can be cached again
        cache.push(trip("169", 10, 15));
        assert_eq!(cache.len(), 3);
    }
}
