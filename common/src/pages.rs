//! Page navigation for the simulator window.
//!
//! Press `Y` to switch between the gauge and the debug view.

/// Pages the host window can show.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// Speedometer with the slider below it.
    #[default]
    Gauge,

    /// Frame timing, redraw counters and the debug log.
    Debug,
}

impl Page {
    /// Switch to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Gauge => Self::Debug,
            Self::Debug => Self::Gauge,
        }
    }

    /// Whether slider input should reach the gauge on this page.
    #[inline]
    pub const fn accepts_input(self) -> bool { matches!(self, Self::Gauge) }
}
