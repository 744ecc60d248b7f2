//! Geometry for a resolved grid: taffy layout and hit testing.

pub mod engine;
pub mod spatial;

pub use engine::LayoutEngine;
pub use spatial::SpatialMap;
