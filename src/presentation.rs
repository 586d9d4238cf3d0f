//! Render-side view of the tracker state
//!
//! Nothing here draws; it derives what a renderer needs from a snapshot: the
//! filter to apply to the container, where the pointer marker sits, and the
//! coordinate readout.

use crate::tracker::state::Snapshot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One rendered state of the container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayFrame {
    /// CSS-style filter, `blur(Npx)` while idle and `none` otherwise
    pub filter: String,
    /// Marker offset from the container's top-left corner
    pub marker_left: f64,
    pub marker_top: f64,
    pub label: String,
}

impl fmt::Display for OverlayFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [filter: {}]", self.label, self.filter)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BlurOverlay {
    blur_radius_px: f64,
}

impl BlurOverlay {
    pub fn new(blur_radius_px: f64) -> Self {
        Self { blur_radius_px }
    }

    pub fn filter(&self, idle: bool) -> String {
        if idle {
            format!("blur({}px)", self.blur_radius_px)
        } else {
            "none".to_string()
        }
    }

    pub fn render(&self, snapshot: &Snapshot) -> OverlayFrame {
        let position = snapshot.position;
        OverlayFrame {
            filter: self.filter(snapshot.idle),
            marker_left: position.x,
            marker_top: position.y,
            label: format!("Mouse position: x: {}, y: {}", position.x, position.y),
        }
    }
}
