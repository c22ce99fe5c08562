//! Public transit trip monitor.
//!
//! Keeps a short, deduplicated list of upcoming departures between named
//! stops, asking the ResRobot trip planner for more only when the list runs
//! low.

pub mod api_key;
pub mod domain;
pub mod logging;
pub mod monitor;
pub mod resrobot;
