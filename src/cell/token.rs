//! Cell tokens, markers, and resolved cells.
//!
//! A [`Token`] is what a caller writes into a matrix. Construction matrices
//! are normalized into [`Cell`]s, a closed set where every value is either a
//! control to create or one of the three [`Marker`]s.

use std::fmt;

use crate::control::ControlSpec;
use crate::event::Callback;

// ---------------------------------------------------------------------------
// Marker
// ---------------------------------------------------------------------------

/// Sentinel cells that direct resolution instead of naming a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// An empty label. Every blank cell is its own control.
    Blank,
    /// Repeat the control to the left, widening its column span.
    ContinueLeft,
    /// Repeat the control above, widening its row span.
    ContinueUp,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => f.write_str("_"),
            Self::ContinueLeft => f.write_str("___"),
            Self::ContinueUp => f.write_str("I"),
        }
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A raw matrix entry as written by the caller.
///
/// The same token type feeds every matrix a grid accepts; each matrix decides
/// which variants it allows (see [`crate::cell::validate`]).
#[derive(Debug, Clone)]
pub enum Token {
    /// A string: a label, a `__text entry__`, or an alias name.
    Text(String),
    /// A short sequence; `["OK"]` declares a button.
    List(Vec<Token>),
    /// A sentinel cell.
    Marker(Marker),
    /// An explicitly declared control.
    Control(ControlSpec),
    /// A callback for an events matrix.
    Callback(Callback),
}

impl Token {
    /// Shorthand for [`Marker::Blank`].
    pub const BLANK: Token = Token::Marker(Marker::Blank);
    /// Shorthand for [`Marker::ContinueLeft`].
    pub const LEFT: Token = Token::Marker(Marker::ContinueLeft);
    /// Shorthand for [`Marker::ContinueUp`].
    pub const UP: Token = Token::Marker(Marker::ContinueUp);

    /// A one-element list, the compact form of a button.
    pub fn button(text: impl Into<String>) -> Self {
        Self::List(vec![Self::Text(text.into())])
    }

    /// The marker this token holds, if any.
    pub fn as_marker(&self) -> Option<Marker> {
        match self {
            Self::Marker(m) => Some(*m),
            _ => None,
        }
    }

    /// Whether this token is a marker.
    pub fn is_marker(&self) -> bool {
        self.as_marker().is_some()
    }

    /// Short human-readable description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Text(s) => format!("text {s:?}"),
            Self::List(items) => format!("list of {} item(s)", items.len()),
            Self::Marker(m) => format!("marker {m}"),
            Self::Control(spec) => format!("{} {:?}", spec.kind, spec.text),
            Self::Callback(cb) => format!("callback {cb:?}"),
        }
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Marker> for Token {
    fn from(m: Marker) -> Self {
        Self::Marker(m)
    }
}

impl From<ControlSpec> for Token {
    fn from(spec: ControlSpec) -> Self {
        Self::Control(spec)
    }
}

impl From<Callback> for Token {
    fn from(cb: Callback) -> Self {
        Self::Callback(cb)
    }
}

impl From<Vec<Token>> for Token {
    fn from(items: Vec<Token>) -> Self {
        Self::List(items)
    }
}

impl<const N: usize> From<[&str; N]> for Token {
    fn from(items: [&str; N]) -> Self {
        Self::List(items.into_iter().map(Token::from).collect())
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A normalized construction cell: a control to create, or a marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Create this control.
    Widget(ControlSpec),
    /// Create a fresh empty label.
    Blank,
    /// Reuse the control on the left.
    ContinueLeft,
    /// Reuse the control above.
    ContinueUp,
}

impl Cell {
    /// Convert a normalized token. Returns `None` for tokens that do not
    /// describe a control or marker.
    pub fn from_token(token: Token) -> Option<Cell> {
        match token {
            Token::Control(spec) => Some(Cell::Widget(spec)),
            Token::Marker(Marker::Blank) => Some(Cell::Blank),
            Token::Marker(Marker::ContinueLeft) => Some(Cell::ContinueLeft),
            Token::Marker(Marker::ContinueUp) => Some(Cell::ContinueUp),
            Token::Text(_) | Token::List(_) | Token::Callback(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_display_matches_shorthand() {
        assert_eq!(Marker::Blank.to_string(), "_");
        assert_eq!(Marker::ContinueLeft.to_string(), "___");
        assert_eq!(Marker::ContinueUp.to_string(), "I");
    }

    #[test]
    fn array_becomes_list() {
        let token = Token::from(["OK"]);
        match token {
            Token::List(items) => {
                assert_eq!(items.len(), 1);
                assert!(matches!(&items[0], Token::Text(s) if s == "OK"));
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn marker_constants() {
        assert_eq!(Token::BLANK.as_marker(), Some(Marker::Blank));
        assert_eq!(Token::LEFT.as_marker(), Some(Marker::ContinueLeft));
        assert_eq!(Token::UP.as_marker(), Some(Marker::ContinueUp));
        assert!(!Token::from("x").is_marker());
    }

    #[test]
    fn describe_text() {
        assert_eq!(Token::from("hi").describe(), "text \"hi\"");
        assert_eq!(Token::List(vec![]).describe(), "list of 0 item(s)");
    }

    #[test]
    fn cell_from_token() {
        assert_eq!(
            Cell::from_token(ControlSpec::button("B").into()),
            Some(Cell::Widget(ControlSpec::button("B")))
        );
        assert_eq!(Cell::from_token(Token::BLANK), Some(Cell::Blank));
        assert_eq!(Cell::from_token(Token::LEFT), Some(Cell::ContinueLeft));
        assert_eq!(Cell::from_token(Token::UP), Some(Cell::ContinueUp));
        assert_eq!(Cell::from_token(Token::from("raw")), None);
    }
}
