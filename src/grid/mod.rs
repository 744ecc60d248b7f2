//! Grid resolution: placements, the two-pass resolver, and the [`Grid`] itself.

pub mod gui;
pub mod placement;
pub mod resolve;

pub use gui::Grid;
pub use placement::{GridLayout, Placement};
pub use resolve::SpanPolicy;
