//! Redraw request tracking.
//!
//! Widgets never draw on their own. A state change records a request and
//! the host loop decides when to repaint:
//!
//! ```ignore
//! gauge.set_speed(120);                // records a request
//! if gauge.redraw().is_pending() {
//!     gauge.draw(&mut display);
//!     gauge.redraw_mut().take();       // acknowledge
//! }
//! ```
//!
//! Requests are counted rather than flagged so a host (or a test) can tell
//! that every mutation asked for a repaint, even when several arrive between
//! two frames.
//!
//! # Update Strategy
//!
//! | Event | Effect |
//! |-------|--------|
//! | Widget created | one pending request (first frame) |
//! | `set_speed` / `configure` | one more request |
//! | `measure` that changes the bounds | one more request |
//! | Host draws and calls `take` | pending count back to zero |

/// Counts redraw requests between frames.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RedrawRequests {
    /// Requests since the last `take`.
    pending: u32,

    /// Requests since creation.
    total: u32,
}

impl RedrawRequests {
    /// Start with one pending request so the first frame is always drawn.
    pub const fn new() -> Self { Self { pending: 1, total: 1 } }

    /// Record one request.
    #[inline]
    pub const fn request(&mut self) {
        self.pending = self.pending.saturating_add(1);
        self.total = self.total.saturating_add(1);
    }

    /// Whether a repaint is owed.
    #[inline]
    pub const fn is_pending(&self) -> bool { self.pending > 0 }

    /// Requests since the last `take`.
    #[inline]
    pub const fn pending(&self) -> u32 { self.pending }

    /// Requests since creation.
    #[inline]
    pub const fn total(&self) -> u32 { self.total }

    /// Acknowledge all pending requests and return how many there were.
    #[inline]
    pub const fn take(&mut self) -> u32 {
        let pending = self.pending;
        self.pending = 0;
        pending
    }
}

impl Default for RedrawRequests {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
