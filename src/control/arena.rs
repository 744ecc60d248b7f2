//! Control arena: every live control of a grid, keyed by [`ControlId`].

use std::cell::{Ref, RefCell};

use slotmap::{new_key_type, SlotMap};

use super::kind::ControlKind;
use super::spec::ControlSpec;

new_key_type! {
    /// Unique handle of a control inside its grid. Copy, lightweight (u64).
    pub struct ControlId;
}

/// A live control.
///
/// The kind is fixed at creation. The display text belongs to the host
/// toolkit and can change at any time, including from inside a callback that
/// only holds a shared reference to the grid.
#[derive(Debug)]
pub struct Control {
    kind: ControlKind,
    text: RefCell<String>,
}

impl Control {
    /// Create a control from its descriptor.
    pub fn from_spec(spec: ControlSpec) -> Self {
        Self {
            kind: spec.kind,
            text: RefCell::new(spec.text),
        }
    }

    /// The control's kind.
    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    /// Borrow the current display text.
    pub fn text(&self) -> Ref<'_, str> {
        Ref::map(self.text.borrow(), String::as_str)
    }

    /// Replace the display text.
    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.borrow_mut() = text.into();
    }
}

/// Slotmap arena owning all controls of one grid.
///
/// Controls are only ever added; they live as long as the arena.
#[derive(Debug, Default)]
pub struct Controls {
    nodes: SlotMap<ControlId, Control>,
}

impl Controls {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Create a control from `spec` and return its handle.
    pub fn insert(&mut self, spec: ControlSpec) -> ControlId {
        self.nodes.insert(Control::from_spec(spec))
    }

    /// Immutable access to a control.
    pub fn get(&self, id: ControlId) -> Option<&Control> {
        self.nodes.get(id)
    }

    /// Whether the arena holds a control with this handle.
    pub fn contains(&self, id: ControlId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of controls.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all controls with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (ControlId, &Control)> {
        self.nodes.iter()
    }
}
