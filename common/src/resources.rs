//! Externally supplied display resources.
//!
//! The gauge does not own its text template or its default text sizes; they
//! come from the host (a locale bundle, a theme). [`Resources::DEFAULT`]
//! holds the values used when the host supplies nothing.
//!
//! # Template Format
//!
//! The template is a printf-style string with a single integer slot:
//! - `%d` is replaced by the value (only the first occurrence)
//! - `%%` is a literal `%`
//!
//! Formatting writes into a `heapless::String` via `core::fmt::Write`, so it
//! works without an allocator. Output that does not fit is truncated.

use core::fmt::Write;

use heapless::String;

/// Capacity of a formatted value string.
pub const VALUE_TEXT_LEN: usize = 24;

/// Formatted value text, stack-allocated.
pub type ValueText = String<VALUE_TEXT_LEN>;

/// Host-provided template and default lengths.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Resources {
    /// Template used for min/max labels and the readout.
    pub speed_value: &'static str,
    /// Default label text size in pixels.
    pub default_text_size: u32,
    /// Default readout text size in pixels.
    pub default_counter_text_size: u32,
}

impl Resources {
    /// Resources used when the host provides none.
    pub const DEFAULT: Self = Self {
        speed_value: "%d",
        default_text_size: 20,
        default_counter_text_size: 30,
    };

    /// Format `value` with this bundle's template.
    #[inline]
    pub fn format_speed(
        &self,
        value: i32,
    ) -> ValueText {
        format_value(self.speed_value, value)
    }
}

impl Default for Resources {
    fn default() -> Self { Self::DEFAULT }
}

/// Render `value` into `template`.
pub fn format_value<const N: usize>(
    template: &str,
    value: i32,
) -> String<N> {
    let mut out: String<N> = String::new();
    let mut substituted = false;
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            if out.push(c).is_err() {
                break;
            }
            continue;
        }
        let written = match chars.next() {
            Some('d') if !substituted => {
                substituted = true;
                write!(out, "{value}")
            }
            Some('%') => out.push('%').map_err(|_| core::fmt::Error),
            Some(other) => out.push('%').and_then(|()| out.push(other)).map_err(|_| core::fmt::Error),
            None => out.push('%').map_err(|_| core::fmt::Error),
        };
        if written.is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_template() {
        let s: ValueText = format_value("%d", 120);
        assert_eq!(s.as_str(), "120");
    }

    #[test]
    fn test_template_with_unit() {
        let s: ValueText = format_value("%d km/h", 0);
        assert_eq!(s.as_str(), "0 km/h");
    }

    #[test]
    fn test_negative_value() {
        let s: ValueText = format_value("%d", -15);
        assert_eq!(s.as_str(), "-15");
    }

    #[test]
    fn test_escaped_percent() {
        let s: ValueText = format_value("%d%%", 42);
        assert_eq!(s.as_str(), "42%");
    }

    #[test]
    fn test_only_first_slot_substituted() {
        let s: ValueText = format_value("%d/%d", 7);
        assert_eq!(s.as_str(), "7/%d");
    }

    #[test]
    fn test_unknown_directive_kept() {
        let s: ValueText = format_value("%x %d", 3);
        assert_eq!(s.as_str(), "%x 3");
    }

    #[test]
    fn test_truncates_to_capacity() {
        let s: String<4> = format_value("speed %d", 99);
        assert_eq!(s.as_str(), "spee");
    }

    #[test]
    fn test_default_resources() {
        let res = Resources::default();
        assert_eq!(res.format_speed(200).as_str(), "200");
        assert!(res.default_counter_text_size > res.default_text_size);
    }
}
