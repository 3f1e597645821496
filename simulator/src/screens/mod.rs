//! Screen modules beyond the gauge itself.

mod debug;

pub use debug::draw_debug_page;
