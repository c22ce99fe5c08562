//! Registered routes.

/// A monitored origin → destination pair, by stop name.
///
/// Stop IDs are looked up in the [`StopCache`](super::StopCache) when trips
/// are fetched rather than stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// Routes in registration order.
///
/// Registering the same pair twice keeps both entries; each one is fetched
/// on every refresh.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    routes: Vec<Route>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route.
    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Iterate routes in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
