//! Pointer input records
//!
//! Raw pointer movement as delivered by the host surface, plus the geometry
//! used to turn it into region-local coordinates.

pub mod types;

pub use types::{PointerMove, PointerPosition, RegionBounds};
