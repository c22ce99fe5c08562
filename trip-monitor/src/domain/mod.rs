//! Domain types for the trip monitor.
//!
//! These are the validated values the monitor works with. Anything coming
//! off the wire is converted into these types before the monitor sees it.

mod stop;
mod trip;

pub use stop::{InvalidStopId, StopCandidate, StopId};
pub use trip::{PageToken, Trip, TripPage};
