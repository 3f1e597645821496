//! Speedometer gauge widget and its host screen.
//!
//! Platform-agnostic code shared by every front end:
//!
//! - [`dial`]: Angle math for the 201° dial and its color bands
//! - [`config`]: Size constants, defaults and the attribute parser
//! - [`resources`]: Format templates and default text sizes
//! - [`widgets`]: The speedometer gauge and the slider that drives it
//! - [`scene`]: Draw commands produced by the gauge
//! - [`screen`]: Gauge above a slider, wired together
//! - [`render`]: Redraw request bookkeeping
//! - [`layout`]: Measure specs from the host layout pass
//! - [`colors`] / [`styles`]: RGB565 colors and font selection
//! - [`pages`] / [`debug_log`]: Debug page support
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests and never allocates.

// Tests need std for the test harness
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod debug_log;
pub mod dial;
pub mod layout;
pub mod pages;
pub mod render;
pub mod resources;
pub mod scene;
pub mod screen;
pub mod styles;
pub mod widgets;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use config::{ConfigError, GaugeConfig, ParseError};
pub use debug_log::{DebugLog, LogLevel};
pub use pages::Page;
pub use resources::Resources;
pub use screen::SpeedometerScreen;
pub use widgets::{Slider, SliderInput, Speedometer};
