//! Declarative control descriptors.
//!
//! A [`ControlSpec`] describes a control before it exists: its kind and its
//! initial display text. The grid turns each spec into a live
//! [`Control`](super::Control) when the matrix is resolved.

use super::kind::ControlKind;

/// Kind and initial text of a control that has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControlSpec {
    /// What kind of control to create.
    pub kind: ControlKind,
    /// Initial display text (label caption, button text, entry placeholder).
    pub text: String,
}

impl ControlSpec {
    /// Create a spec of any kind.
    pub fn new(kind: ControlKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// A label with the given text.
    pub fn label(text: impl Into<String>) -> Self {
        Self::new(ControlKind::Label, text)
    }

    /// A push button with the given caption.
    pub fn button(text: impl Into<String>) -> Self {
        Self::new(ControlKind::Button, text)
    }

    /// A text entry with the given placeholder text.
    pub fn entry(text: impl Into<String>) -> Self {
        Self::new(ControlKind::TextEntry, text)
    }

    /// A check box with the given caption.
    pub fn checkbox(text: impl Into<String>) -> Self {
        Self::new(ControlKind::Checkbox, text)
    }

    /// A radio button with the given caption.
    pub fn radio(text: impl Into<String>) -> Self {
        Self::new(ControlKind::RadioButton, text)
    }

    /// An empty label, the materialized form of a blank cell.
    pub fn blank() -> Self {
        Self::label("")
    }
}
