//! Monitor configuration.

use chrono::Duration;

/// Default number of cached trips below which a refresh fetches more.
pub const DEFAULT_LOW_WATER_MARK: usize = 5;

/// Longest linger time accepted on the command line: one week.
pub const MAX_LINGER_MINS: i64 = 7 * 24 * 60;

/// Default cap on pages fetched per refresh: the first page plus one
/// continuation page.
pub const DEFAULT_MAX_PAGES: usize = 2;

/// Configuration parameters for a [`TripMonitor`](super::TripMonitor).
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Minutes needed to reach the stop.
    /// Trips leaving within this time are neither admitted nor kept.
    pub linger_time_mins: i64,

    /// Minimum number of cached trips. A refresh only queries the trip
    /// planner while the cache holds fewer trips than this.
    pub low_water_mark: usize,

    /// Maximum number of pages fetched by a single refresh.
    pub max_pages: usize,
}

impl MonitorConfig {
    /// Create a new configuration with the given linger time and defaults
    /// for everything else.
    pub fn new(linger_time_mins: i64) -> Self {
        Self {
            linger_time_mins,
            low_water_mark: DEFAULT_LOW_WATER_MARK,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Set the low-water mark.
    pub fn with_low_water_mark(mut self, n: usize) -> Self {
        self.low_water_mark = n;
        self
    }

    /// Set the page cap. Values below 1 are treated as 1.
    pub fn with_max_pages(mut self, n: usize) -> Self {
        self.max_pages = n.max(1);
        self
    }

    /// Returns the linger time as a Duration.
    ///
    /// Values too large for a `Duration` saturate, so an absurd linger time
    /// simply means no trip is ever reachable.
    pub fn linger_time(&self) -> Duration {
        Duration::try_minutes(self.linger_time_mins).unwrap_or(if self.linger_time_mins < 0 {
            Duration::MIN
        } else {
            Duration::MAX
        })
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::new(15)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = MonitorConfig::default();

        assert_eq!(config.linger_time_mins, 15);
        assert_eq!(config.low_water_mark, 5);
        assert_eq!(config.max_pages, 2);
    }

    #[test]
    fn builder() {
        let config = MonitorConfig::new(7)
            .with_low_water_mark(10)
            .with_max_pages(4);

        assert_eq!(config.linger_time_mins, 7);
        assert_eq!(config.low_water_mark, 10);
        assert_eq!(config.max_pages, 4);
    }

    #[test]
    fn max_pages_is_at_least_one() {
        let config = MonitorConfig::new(15).with_max_pages(0);
        assert_eq!(config.max_pages, 1);
    }

    #[test]
    fn linger_time_duration() {
        let config = MonitorConfig::new(15);
        assert_eq!(config.linger_time(), Duration::minutes(15));
    }

    #[test]
    fn out_of_range_linger_time_saturates() {
        assert_eq!(MonitorConfig::new(i64::MAX / 1000).linger_time(), Duration::MAX);
        assert_eq!(MonitorConfig::new(i64::MIN / 1000).linger_time(), Duration::MIN);
        assert_eq!(
            MonitorConfig::new(MAX_LINGER_MINS).linger_time(),
            Duration::weeks(1)
        );
    }
}
