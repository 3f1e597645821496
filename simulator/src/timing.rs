//! Frame pacing for the simulator loop.

use std::time::Duration;

/// Frame budget (50 FPS). Frames that finish early sleep off the remainder,
/// idle frames included, so the gauge polls input at a steady rate.
pub const FRAME_TIME: Duration = Duration::from_millis(20);
