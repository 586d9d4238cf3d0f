//! Pointer trace replay
//!
//! A trace is a JSON document holding the region bounds and a list of
//! pointer moves stamped with milliseconds since the trace start. Replaying
//! feeds them into a tracker on the tokio clock, so idle delays play out in
//! real (or, under test, simulated) time.

use crate::capture::input::types::{PointerMove, RegionBounds};
use crate::tracker::error::{TrackerError, TrackerResult};
use crate::tracker::idle_blur::IdleBlurTracker;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayTrace {
    pub region: RegionBounds,
    pub moves: Vec<PointerMove>,
}

impl ReplayTrace {
    /// Timestamp of the last move, or zero for an empty trace
    pub fn duration_ms(&self) -> f64 {
        self.moves
            .iter()
            .map(|m| m.process_time_ms)
            .fold(0.0, f64::max)
    }
}

/// Offset of a move from the trace start.
///
/// `None` for negative, non-finite, or unrepresentable timestamps.
fn move_offset(event: &PointerMove) -> Option<Duration> {
    let ms = event.process_time_ms;
    if !ms.is_finite() || ms < 0.0 {
        return None;
    }
    Duration::try_from_secs_f64(ms / 1000.0).ok()
}

pub fn load_trace(path: &Path) -> TrackerResult<ReplayTrace> {
    let content = std::fs::read_to_string(path)?;
    let trace: ReplayTrace = serde_json::from_str(&content)?;

    let now = std::time::Instant::now();
    for (index, event) in trace.moves.iter().enumerate() {
        if move_offset(event).and_then(|o| now.checked_add(o)).is_none() {
            return Err(TrackerError::ConfigurationError(format!(
                "Move {} has invalid processTimeMs {}",
                index, event.process_time_ms
            )));
        }
    }

    tracing::info!(
        "Loaded trace with {} moves spanning {}ms",
        trace.moves.len(),
        trace.duration_ms()
    );
    Ok(trace)
}

/// Feed `moves` into `tracker`, waiting until each move's timestamp.
///
/// Moves are expected in timestamp order; a move stamped earlier than one
/// already delivered is delivered immediately. Moves whose timestamp cannot
/// be scheduled are skipped.
pub async fn replay(tracker: &IdleBlurTracker, moves: &[PointerMove]) {
    let start = tokio::time::Instant::now();

    for event in moves {
        let Some(deadline) = move_offset(event).and_then(|o| start.checked_add(o)) else {
            tracing::warn!(
                "Skipping move with unschedulable processTimeMs {}",
                event.process_time_ms
            );
            continue;
        };
        tokio::time::sleep_until(deadline).await;
        tracker.handle_pointer_move(event);
    }
}
