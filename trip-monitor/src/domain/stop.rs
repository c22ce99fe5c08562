//! Stop identifier types.

use std::fmt;

/// Error returned when constructing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop ID: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// An opaque stop identifier as handed out by the stop resolver.
///
/// ResRobot calls this the `extId` of a stop location (e.g. `740000001`).
/// We never interpret the contents; the only validation is that the
/// identifier is non-empty and carries no surrounding whitespace.
///
/// # Examples
///
/// ```
/// use trip_monitor::domain::StopId;
///
/// let id = StopId::new("740000001".to_string()).unwrap();
/// assert_eq!(id.as_str(), "740000001");
///
/// assert!(StopId::new("".to_string()).is_err());
/// assert!(StopId::new(" 740000001".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    /// Create a new stop ID from a string.
    pub fn new(s: String) -> Result<Self, InvalidStopId> {
        if s.is_empty() {
            return Err(InvalidStopId {
                reason: "stop ID cannot be empty",
            });
        }
        if s.trim() != s {
            return Err(InvalidStopId {
                reason: "stop ID cannot have surrounding whitespace",
            });
        }
        Ok(StopId(s))
    }

    /// Returns the stop ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One candidate returned when looking up a stop by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopCandidate {
    /// Identifier to use in trip queries.
    pub id: StopId,
    /// The resolver's full name for the stop, which may differ from the
    /// partial name that was searched for.
    pub name: String,
}

impl StopCandidate {
    pub fn new(id: StopId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_id() {
        assert!(StopId::new("740000001".to_string()).is_ok());
        assert!(StopId::new("A=1@O=Lund C@X=13187".to_string()).is_ok());
        assert!(StopId::new("x".to_string()).is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(StopId::new(String::new()).is_err());
    }

    #[test]
    fn reject_padded() {
        assert!(StopId::new("740000001 ".to_string()).is_err());
        assert!(StopId::new("\t740000001".to_string()).is_err());
        assert!(StopId::new("   ".to_string()).is_err());
    }

    #[test]
    fn display_and_debug() {
        let id = StopId::new("740000001".to_string()).unwrap();
        assert_eq!(format!("{}", id), "740000001");
        assert_eq!(format!("{:?}", id), "StopId(740000001)");
    }

    #[test]
    fn error_display() {
        let err = StopId::new(String::new()).unwrap_err();
        assert_eq!(err.to_string(), "invalid stop ID: stop ID cannot be empty");
    }
}
