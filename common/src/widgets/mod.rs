//! Widget components.
//!
//! All widgets draw onto `DrawTarget<Color = Rgb565>` for platform independence.

mod slider;
mod speedometer;

pub use slider::{ChangeListener, Slider, SliderInput};
pub use speedometer::Speedometer;
