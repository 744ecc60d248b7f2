//! Controls: kinds, declarative descriptors, and the slotmap-backed arena.

pub mod arena;
pub mod kind;
pub mod spec;

pub use arena::{Control, ControlId, Controls};
pub use kind::ControlKind;
pub use spec::ControlSpec;
