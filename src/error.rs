//! Error taxonomy for grid construction, configuration, and lookup.
//!
//! Every fallible operation on a [`Grid`](crate::grid::Grid) returns a
//! [`GridError`]. Errors are reported at the call that detects them and the
//! grid keeps the state it had before that call.

use crate::control::ControlKind;

/// Errors produced while building, configuring, or querying a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The matrix has no rows, an empty first row, or rows of unequal length.
    #[error("malformed matrix: {message}")]
    Shape { message: String },

    /// A cell holds a value the current matrix does not accept.
    #[error("element at ({row}, {col}) is not {expected}: {found}")]
    Element {
        row: usize,
        col: usize,
        expected: &'static str,
        found: String,
    },

    /// A continuation marker has no neighbour to continue from.
    #[error("continuation at ({row}, {col}) has no {direction} neighbour")]
    Continuation {
        row: usize,
        col: usize,
        direction: &'static str,
    },

    /// The cells holding one control do not form a rectangle.
    #[error("control first placed at ({row}, {col}) does not occupy a rectangular region")]
    IrregularSpan { row: usize, col: usize },

    /// A callback was attached to a control kind without a default signal.
    #[error("{kind} at ({row}, {col}) has no default signal")]
    UnsupportedEvent {
        row: usize,
        col: usize,
        kind: ControlKind,
    },

    /// An alias target does not name a registered control.
    #[error("cannot alias {alias:?}: no registered control named {target:?}")]
    Lookup { alias: String, target: String },

    /// Neither an alias nor an identifier matches the requested name.
    #[error("no control named {0:?}")]
    NotFound(String),

    /// The import target already has an attribute with this name.
    #[error("cannot import: duplicate name {0:?}")]
    DuplicateAttribute(String),

    /// No placement covers the requested coordinate.
    #[error("no control at ({row}, {col})")]
    OutOfRange { row: usize, col: usize },

    /// The layout cannot be turned into geometry.
    #[error("layout failed: {message}")]
    Layout { message: String },
}

impl GridError {
    /// Build a [`GridError::Shape`] from any displayable message.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape {
            message: message.into(),
        }
    }

    /// Build a [`GridError::Layout`] from any displayable message.
    pub fn layout(message: impl std::fmt::Display) -> Self {
        Self::Layout {
            message: message.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = GridError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shape() {
        let err = GridError::shape("row lengths differ");
        assert_eq!(err.to_string(), "malformed matrix: row lengths differ");
    }

    #[test]
    fn display_continuation() {
        let err = GridError::Continuation {
            row: 0,
            col: 2,
            direction: "upper",
        };
        assert_eq!(err.to_string(), "continuation at (0, 2) has no upper neighbour");
    }

    #[test]
    fn display_unsupported_event_names_kind() {
        let err = GridError::UnsupportedEvent {
            row: 1,
            col: 0,
            kind: ControlKind::Label,
        };
        assert_eq!(err.to_string(), "Label at (1, 0) has no default signal");
    }

    #[test]
    fn display_duplicate_attribute() {
        let err = GridError::DuplicateAttribute("OK".into());
        assert_eq!(err.to_string(), "cannot import: duplicate name \"OK\"");
    }
}
