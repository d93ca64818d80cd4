//! Doorway and size-fit checks.
//!
//! Doorway failures are informational and recorded as clearance records.
//! Size-fit failures become issues and make the layout infeasible.

mod core;

pub use self::core::{ClearanceCheck, ClearanceRecord, Clearances, WALKWAY_KEY, doorway_key};
