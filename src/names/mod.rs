//! Control names: derived identifiers, aliases, and importing onto other objects.

pub mod import;
pub mod registry;

pub use import::{import_into, AttributeTarget};
pub use registry::{normalize_name, NameRegistry};
