//! Headless testing framework: Pilot, snapshot helpers.
//!
//! Use the [`Pilot`] to drive a [`Grid`](crate::grid::Grid) through
//! [`Grid::run`](crate::grid::Grid::run) without a toolkit. Use
//! [`grid_to_string`] to capture a resolved layout as plain text for
//! snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::{Action, Fired, Pilot};
pub use snapshot::{grid_to_string, layout_to_string};
