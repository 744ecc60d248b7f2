//! # guigrid
//!
//! Declare a GUI layout as a matrix of cells and let guigrid work out the
//! controls, their spans, their names, and their event wiring.
//!
//! A cell is either a control (compact strings and lists expand to labels,
//! buttons, and text entries), a blank, or a continuation of the cell to the
//! left (`___`) or above (`I`). Resolution turns the matrix into one
//! [`Placement`](grid::Placement) per control, with row and column spans,
//! that together tile the grid. Controls are then reachable by coordinate or
//! by name, and further matrices of the same shape attach callbacks and
//! aliases.
//!
//! ```
//! use guigrid::cell::Token;
//! use guigrid::event::Callback;
//! use guigrid::grid::Grid;
//!
//! let mut grid = Grid::new(vec![
//!     vec![Token::from("Name:"), Token::from("__name__")],
//!     vec![Token::button("Greet"), Token::LEFT],
//! ])
//! .unwrap();
//!
//! grid.events(vec![
//!     vec![Token::BLANK, Token::BLANK],
//!     vec![Callback::context(|g| {
//!         if let Ok(entry) = g.named("__name__") {
//!             entry.set_text("hello");
//!         }
//!     })
//!     .into(), Token::BLANK],
//! ])
//! .unwrap();
//!
//! let greet = grid.resolve("Greet").unwrap();
//! assert_eq!(grid.get(1, 1).unwrap(), greet);
//! grid.emit(greet).unwrap();
//! assert_eq!(&*grid.named("__name__").unwrap().text(), "hello");
//! ```
//!
//! ## Core Systems
//!
//! - **[`cell`]**: cell tokens, compact notation, matrix validation
//! - **[`control`]**: control kinds, specs, and the slotmap control arena
//! - **[`grid`]**: two-pass resolution into placements, and the [`Grid`](grid::Grid) itself
//! - **[`names`]**: identifiers, collision suffixes, aliases, attribute import
//! - **[`event`]**: default signals, callbacks, connections
//! - **[`layout`]**: taffy-powered geometry and hit testing for a resolved grid
//! - **[`app`]**: configuration, window, and the [`Host`](app::Host) hand-off
//! - **[`testing`]**: headless [`Pilot`](testing::Pilot) host and snapshot helpers
//! - **[`geometry`]**: Offset, Size, Region primitives
//! - **[`error`]**: the [`GridError`](error::GridError) type

// Foundation
pub mod error;
pub mod geometry;

// Cells and controls
pub mod cell;
pub mod control;

// Resolution and naming
pub mod grid;
pub mod names;

// Events
pub mod event;

// Geometry and hosting
pub mod app;
pub mod layout;

// Headless testing
pub mod testing;

pub use error::{GridError, Result};

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use guigrid_macros::grid;
