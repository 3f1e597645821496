//! Speedometer simulator for desktop.
//!
//! Hosts the gauge and its slider in an `embedded-graphics-simulator`
//! window. Gauge attributes come from the command line or the
//! `SPEEDOMETER_ATTRS` environment variable, e.g.
//!
//! ```text
//! simulator max_speed=240 medium_high_border=180 arrow_color=#FF0000FF
//! ```

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod input;
mod profiling;
mod screens;
mod timing;

use core::fmt::Write;
use std::time::Instant;
use std::{env, thread};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, Window};
use heapless::String;
use speedometer_common::colors::WHITE;
use speedometer_common::debug_log::LOG_LINE_LENGTH;
use speedometer_common::screen::{SCREEN_HEIGHT, SCREEN_WIDTH};
use speedometer_common::{DebugLog, GaugeConfig, Page, Resources, SliderInput, SpeedometerScreen};

use crate::input::{Action, map_event};
use crate::profiling::ProfilingMetrics;
use crate::screens::draw_debug_page;
use crate::timing::FRAME_TIME;

/// Environment variable consulted when no attributes are passed as arguments.
const ATTRS_ENV: &str = "SPEEDOMETER_ATTRS";

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("Speedometer Sim", &output_settings);

    display.clear(WHITE).ok();
    window.update(&display);

    let mut debug_log = DebugLog::new();
    let config = load_config(&attribute_source(), &mut debug_log);
    let mut screen = SpeedometerScreen::new(&config, Resources::DEFAULT);
    debug_log.info("Screen ready");

    let mut current_page = Page::default();
    let mut page_just_switched = false;
    let mut metrics = ProfilingMetrics::new();
    let mut last_fps_calc = Instant::now();
    let mut fps_frame_count = 0u32;
    let mut current_fps = 0.0f32;

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match map_event(ev) {
                Action::Quit => return,
                Action::TogglePage => {
                    current_page = current_page.toggle();
                    page_just_switched = true;
                    debug_log.info(match current_page {
                        Page::Gauge => "Page: Gauge",
                        Page::Debug => "Page: Debug",
                    });
                }
                Action::Slider(input) if current_page.accepts_input() => {
                    let was_dragging = screen.slider().is_dragging();
                    let changed = screen.handle(input);
                    if changed {
                        metrics.inc_speed_changes();
                    }
                    // Drags log once on release instead of per motion event
                    let settled = match input {
                        SliderInput::Step(_) => changed,
                        SliderInput::Release => was_dragging,
                        SliderInput::Press(_) | SliderInput::Drag(_) => false,
                    };
                    if settled {
                        log_speed(&mut debug_log, screen.gauge().speed());
                    }
                }
                Action::Slider(_) | Action::Ignore => {}
            }
        }

        fps_frame_count += 1;
        if last_fps_calc.elapsed().as_secs() >= 1 {
            current_fps = fps_frame_count as f32 / last_fps_calc.elapsed().as_secs_f32();
            fps_frame_count = 0;
            last_fps_calc = Instant::now();
        }

        match current_page {
            Page::Gauge => {
                if screen.needs_redraw() || page_just_switched {
                    let satisfied = screen.draw(&mut display);
                    metrics.record_paint(satisfied);
                } else {
                    metrics.inc_idle_frames();
                }
            }
            Page::Debug => {
                draw_debug_page(&mut display, &metrics, screen.gauge(), &debug_log, current_fps);
            }
        }

        let render_time = frame_start.elapsed();
        page_just_switched = false;

        window.update(&display);

        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }
}

/// Gather attribute text from the arguments, falling back to the environment.
fn attribute_source() -> std::string::String {
    let args: Vec<std::string::String> = env::args().skip(1).collect();
    if args.is_empty() {
        env::var(ATTRS_ENV).unwrap_or_default()
    } else {
        args.join(" ")
    }
}

/// Parse the gauge config and log anything that was skipped or looks wrong.
fn load_config(
    source: &str,
    log: &mut DebugLog,
) -> GaugeConfig {
    let parsed = GaugeConfig::from_attributes(source);

    if let Some(err) = parsed.first_error {
        let mut msg: String<LOG_LINE_LENGTH> = String::new();
        let _ = write!(msg, "Skipped {} attr(s): {err}", parsed.rejected);
        log.warn(&msg);
    }

    // The gauge still renders an invalid config, but its bands and arrow are wrong
    if let Err(err) = parsed.config.validate() {
        let mut msg: String<LOG_LINE_LENGTH> = String::new();
        let _ = write!(msg, "Config: {err}");
        log.error(&msg);
    }

    parsed.config
}

fn log_speed(
    log: &mut DebugLog,
    speed: i32,
) {
    let mut msg: String<LOG_LINE_LENGTH> = String::new();
    let _ = write!(msg, "Speed: {speed}");
    log.info(&msg);
}

#[cfg(test)]
mod tests {
    use speedometer_common::LogLevel;

    use super::*;

    #[test]
    fn test_load_config_clean() {
        let mut log = DebugLog::new();
        let config = load_config("max_speed=240 speed=90", &mut log);
        assert_eq!((config.max_speed, config.speed), (240, 90));
        assert!(log.is_empty(), "nothing to report");
    }

    #[test]
    fn test_load_config_warns_on_skipped_attributes() {
        let mut log = DebugLog::new();
        let config = load_config("speed=abc colour=#FF0000", &mut log);
        assert_eq!(config, GaugeConfig::new(), "bad entries keep defaults");

        let entries: Vec<(LogLevel, &str)> = log.iter().collect();
        assert_eq!(entries, [(LogLevel::Warn, "Skipped 2 attr(s): invalid number")]);
    }

    #[test]
    fn test_load_config_logs_invalid_config_as_error() {
        let mut log = DebugLog::new();
        let config = load_config("max_speed=0", &mut log);
        assert_eq!(config.max_speed, 0, "invalid config is still used");

        let (level, line) = log.iter().next().unwrap();
        assert_eq!(level, LogLevel::Error);
        assert_eq!(line, "Config: max speed 0 <= 0");
    }
}
