//! Control kinds and their default interaction signals.

use std::fmt;

use crate::event::signal::{self, Signal};

/// The kind of UI element a control stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Static text.
    Label,
    /// A push button.
    Button,
    /// A single-line text entry.
    TextEntry,
    /// A two-state check box.
    Checkbox,
    /// A radio button.
    RadioButton,
}

impl ControlKind {
    /// Every kind, in declaration order.
    pub const ALL: [ControlKind; 5] = [
        ControlKind::Label,
        ControlKind::Button,
        ControlKind::TextEntry,
        ControlKind::Checkbox,
        ControlKind::RadioButton,
    ];

    /// The type name used in diagnostics (e.g. "Button").
    pub fn name(self) -> &'static str {
        match self {
            Self::Label => "Label",
            Self::Button => "Button",
            Self::TextEntry => "TextEntry",
            Self::Checkbox => "Checkbox",
            Self::RadioButton => "RadioButton",
        }
    }

    /// The primary interaction signal of this kind, if it has one.
    pub fn default_signal(self) -> Option<Signal> {
        signal::default_signal(self)
    }

    /// Whether callbacks can be bound to this kind through an events matrix.
    pub fn accepts_events(self) -> bool {
        self.default_signal().is_some()
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
