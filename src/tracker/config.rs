use crate::tracker::error::{TrackerError, TrackerResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reference idle delay before the blur kicks in
pub const DEFAULT_IDLE_DELAY_MS: u64 = 5000;

/// Reference blur radius applied while idle
pub const DEFAULT_BLUR_RADIUS_PX: f64 = 5.0;

/// Idle-blur tracker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackerConfig {
    /// Inactivity window after the last qualifying move
    pub idle_delay_ms: u64,
    /// Arm the idle timer as soon as the tracker attaches.
    ///
    /// When false the tracker starts idle and only arms after the first move.
    pub arm_on_attach: bool,
    /// Blur radius the presentation layer applies while idle
    pub blur_radius_px: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            idle_delay_ms: DEFAULT_IDLE_DELAY_MS,
            arm_on_attach: true,
            blur_radius_px: DEFAULT_BLUR_RADIUS_PX,
        }
    }
}

impl TrackerConfig {
    pub fn idle_delay(&self) -> Duration {
        Duration::from_millis(self.idle_delay_ms)
    }

    pub fn validate(&self) -> TrackerResult<()> {
        if self.idle_delay_ms == 0 {
            return Err(TrackerError::ConfigurationError(
                "idleDelayMs must be greater than zero".to_string(),
            ));
        }
        if !self.blur_radius_px.is_finite() || self.blur_radius_px < 0.0 {
            return Err(TrackerError::ConfigurationError(format!(
                "blurRadiusPx must be a non-negative number, got {}",
                self.blur_radius_px
            )));
        }
        Ok(())
    }
}
