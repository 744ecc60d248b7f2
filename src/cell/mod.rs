//! Cell tokens: compact notation, normalization, and matrix validation.

pub mod normalize;
pub mod token;
pub mod validate;

pub use normalize::{normalize, normalize_rows};
pub use token::{Cell, Marker, Token};
pub use validate::{validate, Accept};
