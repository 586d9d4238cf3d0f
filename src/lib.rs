//! Idle-blur tracker
//!
//! Tracks the pointer over a host region and reports when it has gone idle,
//! so a presentation layer can blur the container.

pub mod capture;
pub mod presentation;
pub mod replay;
pub mod tracker;

pub use capture::{ManagedRegion, PointerMove, PointerPosition, Region, RegionBounds};
pub use presentation::{BlurOverlay, OverlayFrame};
pub use tracker::{IdleBlurTracker, Observer, Snapshot, TrackerConfig, TrackerError, TrackerResult};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the default tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "idle_blur_tracker=debug,idle_blur_replay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
