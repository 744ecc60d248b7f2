//! Default-signal table.
//!
//! Each control kind exposes at most one primary interaction event. Binding a
//! callback through an events matrix always targets that event.

use std::fmt;

use crate::control::ControlKind;

/// A control's primary interaction event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// A button was activated.
    Clicked,
    /// Return was pressed inside a text entry.
    ReturnPressed,
}

impl Signal {
    /// The signal's name as hosts refer to it.
    pub fn name(self) -> &'static str {
        match self {
            Self::Clicked => "clicked",
            Self::ReturnPressed => "return_pressed",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up the default signal of a control kind.
pub fn default_signal(kind: ControlKind) -> Option<Signal> {
    match kind {
        ControlKind::Button => Some(Signal::Clicked),
        ControlKind::TextEntry => Some(Signal::ReturnPressed),
        ControlKind::Label | ControlKind::Checkbox | ControlKind::RadioButton => None,
    }
}
