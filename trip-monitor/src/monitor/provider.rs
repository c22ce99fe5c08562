//! Collaborator traits for the monitor.
//!
//! The monitor only talks to the outside world through these two traits,
//! so it can be tested with in-memory data. Calls are awaited one at a time;
//! implementations need not be `Send` or safe for concurrent use.

use crate::domain::{PageToken, StopCandidate, StopId, TripPage};

/// Errors reported by stop resolvers and trip fetchers.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MonitorError {
    /// The resolver found no stop matching the name
    #[error("no stop found for '{name}'")]
    StopNotFound { name: String },

    /// The resolver failed
    #[error("failed to look up stop '{name}': {message}")]
    Lookup { name: String, message: String },

    /// The fetcher failed to return a page of trips
    #[error("failed to fetch trips from {origin} to {destination}: {message}")]
    Fetch {
        origin: StopId,
        destination: StopId,
        message: String,
    },
}

/// Trait for resolving free-text stop names.
#[allow(async_fn_in_trait)]
pub trait StopResolver {
    /// Look up stops matching `name`.
    ///
    /// Candidates are returned in the resolver's own order of preference.
    /// An empty result is not an error at this level.
    async fn lookup(&self, name: &str) -> Result<Vec<StopCandidate>, MonitorError>;
}

/// Trait for fetching pages of trips between two stops.
#[allow(async_fn_in_trait)]
pub trait TripFetcher {
    /// Fetch one page of trips from `origin` to `destination`.
    ///
    /// `token` is `None` for the first page and the previous page's
    /// continuation token afterwards.
    async fn trips(
        &self,
        origin: &StopId,
        destination: &StopId,
        token: Option<&PageToken>,
    ) -> Result<TripPage, MonitorError>;
}
