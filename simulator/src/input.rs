//! Maps window events onto screen actions.
//!
//! | Event | Action |
//! |-------|--------|
//! | `Left` / `Right` | slider step of 1 |
//! | `Down` / `Up` | slider step of 10 |
//! | mouse down / move / up | press / drag / release |
//! | `Y` | toggle page |
//! | window close, `Escape` | quit |

use embedded_graphics_simulator::SimulatorEvent;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use speedometer_common::SliderInput;

/// Slider step for the left/right arrow keys.
pub const FINE_STEP: i32 = 1;

/// Slider step for the up/down arrow keys.
pub const COARSE_STEP: i32 = 10;

/// What the main loop should do with one window event.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Quit,
    TogglePage,
    Slider(SliderInput),
    Ignore,
}

/// Translate a window event. Key repeats are ignored only for page toggles.
pub fn map_event(event: SimulatorEvent) -> Action {
    match event {
        SimulatorEvent::Quit => Action::Quit,
        SimulatorEvent::KeyDown { keycode, repeat, .. } => map_key(keycode, repeat),
        SimulatorEvent::MouseButtonDown { mouse_btn: MouseButton::Left, point } => {
            Action::Slider(SliderInput::Press(point))
        }
        SimulatorEvent::MouseMove { point } => Action::Slider(SliderInput::Drag(point)),
        SimulatorEvent::MouseButtonUp { mouse_btn: MouseButton::Left, .. } => Action::Slider(SliderInput::Release),
        _ => Action::Ignore,
    }
}

fn map_key(
    keycode: Keycode,
    repeat: bool,
) -> Action {
    match keycode {
        Keycode::Escape => Action::Quit,
        Keycode::Y if !repeat => Action::TogglePage,
        Keycode::Left => Action::Slider(SliderInput::Step(-FINE_STEP)),
        Keycode::Right => Action::Slider(SliderInput::Step(FINE_STEP)),
        Keycode::Down => Action::Slider(SliderInput::Step(-COARSE_STEP)),
        Keycode::Up => Action::Slider(SliderInput::Step(COARSE_STEP)),
        _ => Action::Ignore,
    }
}
