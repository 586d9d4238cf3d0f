//! Tracked region handle
//!
//! The host owns the element being tracked. The tracker only holds a weak
//! handle to it and asks for the bounding box on every event, so resizes and
//! scrolling are picked up without any cache invalidation.

use crate::capture::input::types::RegionBounds;
use parking_lot::Mutex as ParkingMutex;

/// A host element whose local coordinate space pointer positions are reported in.
pub trait Region: Send + Sync {
    /// Current bounding box in viewport coordinates.
    ///
    /// Returns `None` when the element is not laid out (unmounted, hidden,
    /// mid-teardown).
    fn bounding_rect(&self) -> Option<RegionBounds>;
}

/// Region with bounds that the host updates explicitly.
#[derive(Debug, Default)]
pub struct ManagedRegion {
    bounds: ParkingMutex<Option<RegionBounds>>,
}

impl ManagedRegion {
    pub fn new(bounds: RegionBounds) -> Self {
        Self {
            bounds: ParkingMutex::new(Some(bounds)),
        }
    }

    /// Region that has not been laid out yet
    pub fn unmounted() -> Self {
        Self::default()
    }

    pub fn set_bounds(&self, bounds: RegionBounds) {
        *self.bounds.lock() = Some(bounds);
    }

    pub fn unmount(&self) {
        *self.bounds.lock() = None;
    }
}

impl Region for ManagedRegion {
    fn bounding_rect(&self) -> Option<RegionBounds> {
        *self.bounds.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_managed_region_tracks_updates() {
        let region = ManagedRegion::new(RegionBounds::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(region.bounding_rect(), Some(RegionBounds::new(0.0, 0.0, 10.0, 10.0)));

        region.set_bounds(RegionBounds::new(5.0, 5.0, 20.0, 20.0));
        assert_eq!(region.bounding_rect().map(|b| b.left), Some(5.0));

        region.unmount();
        assert!(region.bounding_rect().is_none());
    }

    #[test]
    fn test_unmounted_region_has_no_bounds() {
        assert!(ManagedRegion::unmounted().bounding_rect().is_none());
    }
}
