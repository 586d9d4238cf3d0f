//! Host-side capture surface
//!
//! Pointer event records and the region abstraction the tracker observes.

pub mod input;
pub mod region;

pub use input::{PointerMove, PointerPosition, RegionBounds};
pub use region::{ManagedRegion, Region};
