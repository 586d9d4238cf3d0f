//! Replays a recorded pointer trace through the idle-blur tracker and prints
//! every rendered state of the container.
//!
//! Usage: `idle-blur-replay <trace.json> [config.json]`

use anyhow::{bail, Context};
use idle_blur_tracker::replay::{load_trace, replay};
use idle_blur_tracker::{BlurOverlay, IdleBlurTracker, ManagedRegion, Region, Snapshot, TrackerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

fn load_config(path: Option<PathBuf>) -> anyhow::Result<TrackerConfig> {
    let Some(path) = path else {
        return Ok(TrackerConfig::default());
    };
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse config {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    idle_blur_tracker::init_tracing();

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let Some(trace_path) = args.next() else {
        bail!("usage: idle-blur-replay <trace.json> [config.json]");
    };
    let config = load_config(args.next())?;

    let trace = load_trace(&trace_path)
        .with_context(|| format!("Failed to load trace {}", trace_path.display()))?;

    tracing::info!("Starting idle-blur replay v{}", env!("CARGO_PKG_VERSION"));

    let overlay = BlurOverlay::new(config.blur_radius_px);
    let idle_delay = config.idle_delay();
    let tracker = IdleBlurTracker::new(config, move |snapshot: Snapshot| {
        println!("{}", overlay.render(&snapshot));
    })?;

    let region: Arc<dyn Region> = Arc::new(ManagedRegion::new(trace.region));
    tracker.attach(Arc::downgrade(&region));

    replay(&tracker, &trace.moves).await;

    // Let the final idle period play out
    tokio::time::sleep(idle_delay + Duration::from_millis(1)).await;
    tracker.detach();

    Ok(())
}
