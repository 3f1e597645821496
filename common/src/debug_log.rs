//! Debug logging.
//!
//! A small ring buffer of leveled messages, shown on the simulator's debug
//! page. No allocator and no time source: entries are ordered by arrival.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! log.info("Screen ready");
//! log.warn("max_speed 0 <= 0");
//!
//! for (level, line) in log.iter() {
//!     draw_line(level.color(), line);
//! }
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use heapless::{Deque, String};

use crate::colors::{GREEN, ORANGE, RED};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of log lines to keep in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 48;

/// One stored log line.
pub type LogLine = String<LOG_LINE_LENGTH>;

// =============================================================================
// Log Levels
// =============================================================================

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LogLevel {
    /// Normal operation (green).
    #[default]
    Info,
    /// Recoverable problems such as a rejected config entry (orange).
    Warn,
    /// Errors (red).
    Error,
}

impl LogLevel {
    /// Display color for this level.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Info => GREEN,
            Self::Warn => ORANGE,
            Self::Error => RED,
        }
    }

    /// Single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Ring buffer for debug log messages.
///
/// Stores the last `LOG_BUFFER_SIZE` messages. Old messages are dropped
/// when the buffer is full.
pub struct DebugLog {
    buffer: Deque<(LogLevel, LogLine), LOG_BUFFER_SIZE>,
}

impl DebugLog {
    /// Create a new empty debug log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a message. If the buffer is full, the oldest message is dropped.
    pub fn push(
        &mut self,
        level: LogLevel,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        // Truncate on a char boundary
        let mut line = LogLine::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }

        self.buffer.push_back((level, line)).ok();
    }

    #[inline]
    pub fn info(
        &mut self,
        msg: &str,
    ) {
        self.push(LogLevel::Info, msg);
    }

    #[inline]
    pub fn warn(
        &mut self,
        msg: &str,
    ) {
        self.push(LogLevel::Warn, msg);
    }

    #[inline]
    pub fn error(
        &mut self,
        msg: &str,
    ) {
        self.push(LogLevel::Error, msg);
    }

    /// Iterate over log messages (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = (LogLevel, &str)> {
        self.buffer.iter().map(|(level, line)| (*level, line.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Push a u32 value to a heapless string (no format! machinery).
pub fn push_u32<const N: usize>(
    s: &mut String<N>,
    mut val: u32,
) {
    if val == 0 {
        s.push('0').ok();
        return;
    }

    // Build digits in reverse
    let mut digits = [0u8; 10];
    let mut i = 0;
    while val > 0 {
        digits[i] = (val % 10) as u8;
        val /= 10;
        i += 1;
    }

    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_push() {
        let mut log = DebugLog::new();
        assert!(log.is_empty());

        log.info("Screen ready");
        assert_eq!(log.len(), 1);

        log.warn("Bad attribute");
        assert_eq!(log.len(), 2);

        let levels: Vec<LogLevel> = log.iter().map(|(level, _)| level).collect();
        assert_eq!(levels, [LogLevel::Info, LogLevel::Warn]);
    }

    #[test]
    fn test_debug_log_ring_buffer() {
        let mut log = DebugLog::new();

        for i in 0..LOG_BUFFER_SIZE {
            let mut msg: String<16> = String::new();
            push_u32(&mut msg, i as u32);
            log.info(&msg);
        }
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        // Push one more - should drop oldest
        log.error("New");
        assert_eq!(log.len(), LOG_BUFFER_SIZE);

        let (_, first) = log.iter().next().unwrap();
        assert_eq!(first, "1");
        let (level, last) = log.iter().last().unwrap();
        assert_eq!((level, last), (LogLevel::Error, "New"));
    }

    #[test]
    fn test_debug_log_truncation() {
        let mut log = DebugLog::new();
        let long_msg = "This is a very long message that exceeds the maximum line length limit";
        log.info(long_msg);

        let (_, stored) = log.iter().next().unwrap();
        assert_eq!(stored.len(), LOG_LINE_LENGTH);
        assert!(long_msg.starts_with(stored));
    }

    #[test]
    fn test_level_prefix_and_color() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
        assert_eq!(LogLevel::Warn.prefix(), 'W');
        assert_ne!(LogLevel::Info.color(), LogLevel::Error.color());
    }

    #[test]
    fn test_push_u32() {
        let mut s: String<16> = String::new();
        push_u32(&mut s, 0);
        assert_eq!(s.as_str(), "0");

        let mut s: String<16> = String::new();
        push_u32(&mut s, 123);
        assert_eq!(s.as_str(), "123");

        let mut s: String<16> = String::new();
        push_u32(&mut s, u32::MAX);
        assert_eq!(s.as_str(), "4294967295");
    }
}
