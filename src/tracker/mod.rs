//! Idle detection
//!
//! The tracker turns raw pointer movement into region-local positions and
//! debounces an idle flag behind a single rescheduled timer.

pub mod config;
pub mod error;
pub mod idle_blur;
pub mod state;
pub mod timer;

pub use config::TrackerConfig;
pub use error::{TrackerError, TrackerResult};
pub use idle_blur::{IdleBlurTracker, Observer};
pub use state::{IdlePhase, Snapshot};
