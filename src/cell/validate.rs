//! Matrix shape and element checks.
//!
//! Every matrix handed to a grid (construction, events, names, colors) goes
//! through [`validate`] before anything is created or changed. Markers are
//! accepted in every matrix.

use crate::error::{GridError, Result};

use super::token::Token;

/// Which values a matrix accepts besides markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accept {
    /// Construction matrices: controls (after normalization).
    Control,
    /// Events matrices: callbacks.
    Callback,
    /// Names matrices: alias strings.
    Text,
    /// Hook matrices (colors, groups): anything.
    Any,
}

impl Accept {
    /// Whether `token` passes this predicate.
    pub fn accepts(self, token: &Token) -> bool {
        if token.is_marker() {
            return true;
        }
        match self {
            Self::Control => matches!(token, Token::Control(_)),
            Self::Callback => matches!(token, Token::Callback(_)),
            Self::Text => matches!(token, Token::Text(_)),
            Self::Any => true,
        }
    }

    /// What the predicate expects, for error messages.
    pub fn expected(self) -> &'static str {
        match self {
            Self::Control => "a control or marker",
            Self::Callback => "a callback or marker",
            Self::Text => "a string or marker",
            Self::Any => "a value",
        }
    }
}

/// Check that `rows` is a non-empty rectangular matrix whose cells all pass
/// `accept`. Returns `(nrows, ncols)`.
pub fn validate(rows: &[Vec<Token>], accept: Accept) -> Result<(usize, usize)> {
    let ncols = check_shape(rows)?;
    for (row, cells) in rows.iter().enumerate() {
        for (col, token) in cells.iter().enumerate() {
            if !accept.accepts(token) {
                return Err(GridError::Element {
                    row,
                    col,
                    expected: accept.expected(),
                    found: token.describe(),
                });
            }
        }
    }
    Ok((rows.len(), ncols))
}

/// Check row lengths against the first row. Returns `ncols`.
pub fn check_shape<T>(rows: &[Vec<T>]) -> Result<usize> {
    let first = rows
        .first()
        .ok_or_else(|| GridError::shape("matrix has no rows"))?;
    let ncols = first.len();
    if ncols == 0 {
        return Err(GridError::shape("first row is empty"));
    }
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
        return Err(GridError::shape(format!(
            "row {i} has {} cells, expected {ncols}",
            row.len()
        )));
    }
    Ok(ncols)
}
