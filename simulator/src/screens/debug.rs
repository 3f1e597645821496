//! Debug/profiling page rendering.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;
use speedometer_common::colors::{BLACK, GRAY, GREEN, WHITE, YELLOW};
use speedometer_common::screen::{SCREEN_HEIGHT, SCREEN_WIDTH};
use speedometer_common::styles::LABEL_FONT;
use speedometer_common::{DebugLog, Speedometer};

use crate::profiling::ProfilingMetrics;

const HEADER_Y: i32 = 14;
const HEADER_DIVIDER_Y: i32 = 22;
const SECTION_HEADER_Y: i32 = 38;
const STATS_Y: i32 = 56;
const LOG_DIVIDER_Y: i32 = 150;
const LOG_Y: i32 = 166;
const LOG_LINE_HEIGHT: i32 = 14;
const COL1_X: i32 = 8;
const COL2_X: i32 = 200;
const COL3_X: i32 = 392;
const STAT_LINE_HEIGHT: i32 = 14;

const DEBUG_BG: Rgb565 = BLACK;
const LOG_BG: Rgb565 = Rgb565::new(1, 2, 1);
const HEADER_COLOR: Rgb565 = GREEN;
const SECTION_COLOR: Rgb565 = GRAY;
const VALUE_COLOR: Rgb565 = WHITE;
const HIGHLIGHT_COLOR: Rgb565 = YELLOW;
const LOG_PROMPT_COLOR: Rgb565 = GREEN;
const DIVIDER_COLOR: Rgb565 = GRAY;

type Line20 = String<20>;

pub fn draw_debug_page<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
    gauge: &Speedometer,
    log: &DebugLog,
    fps: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(DEBUG_BG).ok();
    draw_header(display, metrics, fps);
    draw_horizontal_line(display, HEADER_DIVIDER_Y);
    draw_section_headers(display);
    draw_timing_column(display, metrics);
    draw_render_column(display, metrics);
    draw_gauge_column(display, gauge);
    draw_horizontal_line(display, LOG_DIVIDER_Y);
    draw_log_terminal(display, log);
}

fn draw_header<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
    fps: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let header_style = MonoTextStyle::new(LABEL_FONT, HEADER_COLOR);
    let info_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);

    Text::new("DEBUG VIEW", Point::new(COL1_X, HEADER_Y), header_style)
        .draw(display)
        .ok();

    let mut uptime: String<24> = String::new();
    let _ = write!(uptime, "UP {}", metrics.uptime_string());
    Text::new(&uptime, Point::new(COL2_X, HEADER_Y), info_style)
        .draw(display)
        .ok();

    let mut fps_str: String<12> = String::new();
    let _ = write!(fps_str, "{fps:.0} FPS");
    Text::new(&fps_str, Point::new(COL3_X, HEADER_Y), info_style)
        .draw(display)
        .ok();
}

fn draw_section_headers<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(LABEL_FONT, SECTION_COLOR);
    for (label, x) in [("TIMING", COL1_X), ("RENDER", COL2_X), ("GAUGE", COL3_X)] {
        Text::new(label, Point::new(x, SECTION_HEADER_Y), style).draw(display).ok();
    }
}

/// Draw one column of stat lines, highlighting lines from `highlight_from` on.
fn draw_column<D>(
    display: &mut D,
    x: i32,
    lines: &[Line20],
    highlight_from: usize,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let value_style = MonoTextStyle::new(LABEL_FONT, VALUE_COLOR);
    let highlight_style = MonoTextStyle::new(LABEL_FONT, HIGHLIGHT_COLOR);

    let mut y = STATS_Y;
    for (i, line) in lines.iter().enumerate() {
        let style = if i >= highlight_from { highlight_style } else { value_style };
        Text::new(line, Point::new(x, y), style).draw(display).ok();
        y += STAT_LINE_HEIGHT;
    }
}

fn ms(us: u32) -> f32 { us as f32 / 1000.0 }

fn draw_timing_column<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut lines: [Line20; 6] = Default::default();
    let _ = write!(lines[0], "Frame: {:.1}ms", ms(metrics.frame_time_us));
    let _ = write!(lines[1], "Render:{:.1}ms", ms(metrics.render_time_us));
    let _ = write!(lines[2], "Sleep: {:.1}ms", ms(metrics.sleep_time_us));
    let _ = write!(lines[3], "Min:   {:.1}ms", ms(metrics.frame_time_min_us()));
    let _ = write!(lines[4], "Max:   {:.1}ms", ms(metrics.frame_time_max_us));
    let _ = write!(lines[5], "Avg:   {:.1}ms", ms(metrics.frame_time_avg_us()));
    draw_column(display, COL1_X, &lines, 3);
}

fn draw_render_column<D>(
    display: &mut D,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut lines: [Line20; 5] = Default::default();
    let _ = write!(lines[0], "Frames:  {}", metrics.total_frames);
    let _ = write!(lines[1], "Paints:  {}", metrics.gauge_paints);
    let _ = write!(lines[2], "Requests:{}", metrics.redraw_requests);
    let _ = write!(lines[3], "Idle:    {}", metrics.idle_frames);
    let _ = write!(lines[4], "Changes: {}", metrics.speed_changes);
    draw_column(display, COL2_X, &lines, 2);
}

fn draw_gauge_column<D>(
    display: &mut D,
    gauge: &Speedometer,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (low_medium, medium_high) = gauge.borders();
    let mut lines: [Line20; 5] = Default::default();
    let _ = write!(lines[0], "Speed: {}", gauge.speed());
    let _ = write!(lines[1], "Max:   {}", gauge.max_speed());
    let _ = write!(lines[2], "Bands: {low_medium}/{medium_high}");
    let _ = write!(lines[3], "Arrow: {}deg", gauge.arrow_angle());
    let _ = write!(lines[4], "Reqs:  {}", gauge.redraw().total());
    draw_column(display, COL3_X, &lines, 0);
}

fn draw_log_terminal<D>(
    display: &mut D,
    log: &DebugLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let prompt_style = MonoTextStyle::new(LABEL_FONT, LOG_PROMPT_COLOR);

    Rectangle::new(
        Point::new(0, LOG_DIVIDER_Y + 2),
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT - LOG_DIVIDER_Y as u32 - 2),
    )
    .into_styled(PrimitiveStyle::with_fill(LOG_BG))
    .draw(display)
    .ok();

    let mut y = LOG_Y;

    for (level, line) in log.iter() {
        let style = MonoTextStyle::new(LABEL_FONT, level.color());
        let mut prefix: String<4> = String::new();
        let _ = write!(prefix, "{}>", level.prefix());
        Text::new(&prefix, Point::new(COL1_X, y), prompt_style).draw(display).ok();
        Text::new(line, Point::new(COL1_X + 18, y), style).draw(display).ok();
        y += LOG_LINE_HEIGHT;
    }

    Text::new("> _", Point::new(COL1_X, y), prompt_style).draw(display).ok();
}

fn draw_horizontal_line<D>(
    display: &mut D,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(Point::new(2, y), Point::new(SCREEN_WIDTH as i32 - 2, y))
        .into_styled(PrimitiveStyle::with_stroke(DIVIDER_COLOR, 1))
        .draw(display)
        .ok();
}
