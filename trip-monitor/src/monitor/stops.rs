//! Stop name resolution cache.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::StopId;

use super::provider::{MonitorError, StopResolver};

/// Memoized stop name → stop ID mapping.
///
/// Names are the exact strings supplied by the caller, so "Lund Central"
/// and "lund central" are cached separately. Entries are never evicted.
#[derive(Debug, Default)]
pub struct StopCache {
    ids: HashMap<String, StopId>,
}

impl StopCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached stop ID.
    pub fn get(&self, name: &str) -> Option<&StopId> {
        self.ids.get(name)
    }

    /// Check whether a name has been resolved.
    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Number of resolved names.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Resolve a name, consulting the resolver only on a cache miss.
    ///
    /// Successful resolutions are cached. Failures are not, so a later call
    /// asks the resolver again.
    pub async fn resolve<R: StopResolver>(
        &mut self,
        name: &str,
        resolver: &R,
    ) -> Result<StopId, MonitorError> {
        let id = self.find(name, resolver).await?;
        self.insert(name, id.clone());
        Ok(id)
    }

    /// Like [`resolve`](Self::resolve), but leaves the cache untouched.
    ///
    /// Used when several names must all resolve before any of them is kept.
    pub async fn find<R: StopResolver>(
        &self,
        name: &str,
        resolver: &R,
    ) -> Result<StopId, MonitorError> {
        if let Some(id) = self.ids.get(name) {
            return Ok(id.clone());
        }

        let candidates = resolver.lookup(name).await?;

        // Ambiguous names take the resolver's first candidate.
        let first = candidates
            .into_iter()
            .next()
            .ok_or_else(|| MonitorError::StopNotFound {
                name: name.to_string(),
            })?;

        debug!(stop = name, id = %first.id, matched = %first.name, "Resolved stop");
        Ok(first.id)
    }

    /// Record a resolved name. An existing entry is left as it is.
    pub fn insert(&mut self, name: &str, id: StopId) {
        self.ids.entry(name.to_string()).or_insert(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopCandidate;
    use std::sync::Mutex;

    struct FixedResolver {
        candidates: Vec<StopCandidate>,
        calls: Mutex<usize>,
    }

    impl FixedResolver {
        fn new(ids: &[&str]) -> Self {
            Self {
                candidates: ids
                    .iter()
                    .map(|id| StopCandidate::new(StopId::new(id.to_string()).unwrap(), *id))
                    .collect(),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    impl StopResolver for FixedResolver {
        async fn lookup(&self, _name: &str) -> Result<Vec<StopCandidate>, MonitorError> {
            *self.calls.lock().unwrap() += 1;
            Ok(self.candidates.clone())
        }
    }

    struct FailingResolver;

    impl StopResolver for FailingResolver {
        async fn lookup(&self, name: &str) -> Result<Vec<StopCandidate>, MonitorError> {
            Err(MonitorError::Lookup {
                name: name.to_string(),
                message: "connection refused".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn resolves_once_per_name() {
        let resolver = FixedResolver::new(&["740000001"]);
        let mut cache = StopCache::new();

        let first = cache.resolve("Dalby Buss", &resolver).await.unwrap();
        let second = cache.resolve("Dalby Buss", &resolver).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(resolver.calls(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn ambiguous_name_takes_first_candidate() {
        let resolver = FixedResolver::new(&["740000001", "740000002", "740000003"]);
        let mut cache = StopCache::new();

        let id = cache.resolve("Lund", &resolver).await.unwrap();
        assert_eq!(id.as_str(), "740000001");
    }

    #[tokio::test]
    async fn empty_result_is_not_found_and_not_cached() {
        let resolver = FixedResolver::new(&[]);
        let mut cache = StopCache::new();

        let err = cache.resolve("Nowhere", &resolver).await.unwrap_err();
        assert!(matches!(err, MonitorError::StopNotFound { .. }));
        assert!(cache.is_empty());

        // Not cached, so the resolver is asked again
        let _ = cache.resolve("Nowhere", &resolver).await;
        assert_eq!(resolver.calls(), 2);
    }

    #[tokio::test]
    async fn resolver_failure_is_not_cached() {
        let mut cache = StopCache::new();

        let err = cache.resolve("Lund C", &FailingResolver).await.unwrap_err();
        assert!(matches!(err, MonitorError::Lookup { .. }));
        assert!(!cache.contains("Lund C"));
    }

    #[tokio::test]
    async fn find_does_not_cache() {
        let resolver = FixedResolver::new(&["740000001"]);
        let cache = StopCache::new();

        let id = cache.find("Dalby Buss", &resolver).await.unwrap();
        assert_eq!(id.as_str(), "740000001");
        assert!(cache.is_empty());
    }

    #[test]
    fn insert_keeps_first_entry() {
        let mut cache = StopCache::new();
        cache.insert("Lund C", StopId::new("1".into()).unwrap());
        cache.insert("Lund C", StopId::new("2".into()).unwrap());

        assert_eq!(cache.get("Lund C").unwrap().as_str(), "1");
    }
}
