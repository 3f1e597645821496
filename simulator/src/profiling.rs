//! Frame timing and redraw counters for the debug page.
//!
//! The `DebugLog` type is in the common crate since it doesn't need time.

use std::time::{Duration, Instant};

use heapless::String;
use speedometer_common::debug_log::push_u32;

/// Frame timing and render statistics for profiling.
pub struct ProfilingMetrics {
    // Frame timing (microseconds)
    pub frame_time_us: u32,
    pub render_time_us: u32,
    pub sleep_time_us: u32,

    // Statistics
    pub frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,

    // Counters
    pub total_frames: u64,
    /// Frames in which the gauge screen was repainted.
    pub gauge_paints: u32,
    /// Redraw requests satisfied by those paints.
    pub redraw_requests: u32,
    /// Frames where nothing was pending.
    pub idle_frames: u32,
    /// Slider inputs that moved the value.
    pub speed_changes: u32,

    // Uptime tracking
    start_time: Instant,
}

impl ProfilingMetrics {
    const EMA_ALPHA: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            gauge_paints: 0,
            redraw_requests: 0,
            idle_frames: 0,
            speed_changes: 0,
            start_time: Instant::now(),
        }
    }

    /// Record frame timing for this frame.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;
        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    /// Record one gauge paint that satisfied `requests` redraw requests.
    pub fn record_paint(
        &mut self,
        requests: u32,
    ) {
        self.gauge_paints += 1;
        self.redraw_requests += requests;
    }

    #[inline]
    pub fn inc_idle_frames(&mut self) { self.idle_frames += 1; }

    #[inline]
    pub fn inc_speed_changes(&mut self) { self.speed_changes += 1; }

    /// Smallest frame time, or 0 before the first frame.
    #[inline]
    pub const fn frame_time_min_us(&self) -> u32 {
        if self.frame_time_min_us == u32::MAX { 0 } else { self.frame_time_min_us }
    }

    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Format uptime as HH:MM:SS string.
    pub fn uptime_string(&self) -> String<12> { format_hms(self.uptime().as_secs()) }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}

fn format_hms(total_secs: u64) -> String<12> {
    let hours = (total_secs / 3600) as u32;
    let mins = ((total_secs % 3600) / 60) as u32;
    let secs = (total_secs % 60) as u32;

    let mut s = String::new();
    for (i, part) in [hours, mins, secs].into_iter().enumerate() {
        if i > 0 {
            s.push(':').ok();
        }
        if part < 10 {
            s.push('0').ok();
        }
        push_u32(&mut s, part);
    }
    s
}
