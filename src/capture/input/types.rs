use serde::{Deserialize, Serialize};

/// Raw pointer movement reported by the host surface.
///
/// Coordinates are absolute viewport coordinates; the tracker converts them
/// into region-relative offsets when the event is handled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerMove {
    pub client_x: f64,
    pub client_y: f64,
    /// Milliseconds since the start of the trace (replay only)
    #[serde(default)]
    pub process_time_ms: f64,
}

impl PointerMove {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x,
            client_y,
            process_time_ms: 0.0,
        }
    }

    pub fn at(client_x: f64, client_y: f64, process_time_ms: f64) -> Self {
        Self {
            client_x,
            client_y,
            process_time_ms,
        }
    }
}

/// Bounding box of a tracked region, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl RegionBounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Inclusive on every edge, so a pointer resting on the border still counts.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }

    /// Translate a viewport point into this region's local space.
    pub fn to_local(&self, x: f64, y: f64) -> PointerPosition {
        PointerPosition {
            x: x - self.left,
            y: y - self.top,
        }
    }
}

/// Pointer offset relative to the region's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
