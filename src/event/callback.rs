//! Callbacks and their call conventions.

use std::fmt;
use std::rc::Rc;

use crate::grid::Grid;

/// A callback attached to a control's default signal.
///
/// The caller chooses the call convention when building the callback:
/// [`Callback::Bound`] already captures whatever it needs and fires with no
/// arguments, [`Callback::Context`] receives the owning [`Grid`] when fired.
#[derive(Clone)]
pub enum Callback {
    /// Fires with no arguments.
    Bound(Rc<dyn Fn()>),
    /// Fires with a reference to the owning grid.
    Context(Rc<dyn Fn(&Grid)>),
}

impl Callback {
    /// Wrap a closure that takes no arguments.
    pub fn bound(f: impl Fn() + 'static) -> Self {
        Self::Bound(Rc::new(f))
    }

    /// Wrap a closure that receives the owning grid.
    pub fn context(f: impl Fn(&Grid) + 'static) -> Self {
        Self::Context(Rc::new(f))
    }

    /// Invoke the callback with the convention it was built with.
    pub fn invoke(&self, grid: &Grid) {
        match self {
            Self::Bound(f) => f(),
            Self::Context(f) => f(grid),
        }
    }

    /// Whether this callback receives the grid.
    pub fn takes_context(&self) -> bool {
        matches!(self, Self::Context(_))
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bound(_) => write!(f, "Bound(<fn>)"),
            Self::Context(_) => write!(f, "Context(<fn>)"),
        }
    }
}
