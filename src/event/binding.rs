//! Signal connections and events-matrix binding.
//!
//! [`Connections`] keeps, per control, the callbacks attached to its default
//! signal. Connecting is additive: binding the same callback twice makes it
//! fire twice.

use slotmap::SecondaryMap;

use crate::cell::Token;
use crate::control::{ControlId, Controls};
use crate::error::{GridError, Result};
use crate::grid::GridLayout;

use super::callback::Callback;
use super::signal::Signal;

// ---------------------------------------------------------------------------
// Connection
// ---------------------------------------------------------------------------

/// A callback attached to one signal of one control.
#[derive(Debug, Clone)]
pub struct Connection {
    pub signal: Signal,
    pub callback: Callback,
}

// ---------------------------------------------------------------------------
// Connections
// ---------------------------------------------------------------------------

/// All signal connections of a grid, keyed by control.
#[derive(Debug, Default)]
pub struct Connections {
    slots: SecondaryMap<ControlId, Vec<Connection>>,
}

impl Connections {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `callback` to `signal` of `control`, after any existing ones.
    pub fn connect(&mut self, control: ControlId, signal: Signal, callback: Callback) {
        match self.slots.get_mut(control) {
            Some(list) => list.push(Connection { signal, callback }),
            None => {
                self.slots.insert(control, vec![Connection { signal, callback }]);
            }
        }
    }

    /// Callbacks attached to `signal` of `control`, in connection order.
    pub fn callbacks(&self, control: ControlId, signal: Signal) -> Vec<Callback> {
        self.slots
            .get(control)
            .map(|list| {
                list.iter()
                    .filter(|c| c.signal == signal)
                    .map(|c| c.callback.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of connections on `control`, across all signals.
    pub fn count(&self, control: ControlId) -> usize {
        self.slots.get(control).map_or(0, Vec::len)
    }

    /// Total number of connections.
    pub fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    /// Whether nothing is connected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Binding plan
// ---------------------------------------------------------------------------

/// One connection to make: control, its default signal, the callback.
#[derive(Debug, Clone)]
pub struct Binding {
    pub control: ControlId,
    pub signal: Signal,
    pub callback: Callback,
}

/// Work out every connection an events matrix asks for without making any.
///
/// `rows` must already be validated as a callback matrix. Markers are
/// skipped. Fails if a callback lands on a cell no placement covers or on a
/// control kind without a default signal.
pub fn plan_bindings(layout: &GridLayout, controls: &Controls, rows: Vec<Vec<Token>>) -> Result<Vec<Binding>> {
    let mut plan = Vec::new();
    for (row, cells) in rows.into_iter().enumerate() {
        for (col, token) in cells.into_iter().enumerate() {
            let callback = match token {
                Token::Callback(cb) => cb,
                Token::Marker(_) => continue,
                other => {
                    return Err(GridError::Element {
                        row,
                        col,
                        expected: "a callback or marker",
                        found: other.describe(),
                    })
                }
            };
            let control = layout.control_at(row, col)?;
            let kind = controls
                .get(control)
                .map(|c| c.kind())
                .ok_or(GridError::OutOfRange { row, col })?;
            let signal = kind
                .default_signal()
                .ok_or(GridError::UnsupportedEvent { row, col, kind })?;
            plan.push(Binding {
                control,
                signal,
                callback,
            });
        }
    }
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::ControlSpec;
    use crate::grid::Placement;

    fn layout_of(controls: &mut Controls, specs: Vec<ControlSpec>) -> (GridLayout, Vec<ControlId>) {
        let ids: Vec<_> = specs.into_iter().map(|s| controls.insert(s)).collect();
        let placements = ids
            .iter()
            .enumerate()
            .map(|(col, &control)| Placement {
                control,
                row: 0,
                col,
                rowspan: 1,
                colspan: 1,
            })
            .collect();
        (GridLayout::new(1, ids.len(), placements), ids)
    }

    // ── Connections ──────────────────────────────────────────────────

    #[test]
    fn connect_is_additive() {
        let mut controls = Controls::new();
        let id = controls.insert(ControlSpec::button("B"));
        let mut conns = Connections::new();
        let cb = Callback::bound(|| {});
        conns.connect(id, Signal::Clicked, cb.clone());
        conns.connect(id, Signal::Clicked, cb);
        assert_eq!(conns.count(id), 2);
        assert_eq!(conns.callbacks(id, Signal::Clicked).len(), 2);
        assert!(conns.callbacks(id, Signal::ReturnPressed).is_empty());
        assert_eq!(conns.len(), 2);
    }

    #[test]
    fn empty_table() {
        let mut controls = Controls::new();
        let id = controls.insert(ControlSpec::button("B"));
        let conns = Connections::default();
        assert!(conns.is_empty());
        assert_eq!(conns.count(id), 0);
        assert!(conns.callbacks(id, Signal::Clicked).is_empty());
    }

    // ── plan_bindings ────────────────────────────────────────────────

    #[test]
    fn plan_skips_markers() {
        let mut controls = Controls::new();
        let (layout, ids) = layout_of(
            &mut controls,
            vec![ControlSpec::label("L"), ControlSpec::button("B"), ControlSpec::entry("__e__")],
        );
        let rows = vec![vec![
            Token::BLANK,
            Callback::bound(|| {}).into(),
            Callback::context(|_| {}).into(),
        ]];
        let plan = plan_bindings(&layout, &controls, rows).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].control, ids[1]);
        assert_eq!(plan[0].signal, Signal::Clicked);
        assert_eq!(plan[1].control, ids[2]);
        assert_eq!(plan[1].signal, Signal::ReturnPressed);
        assert!(plan[1].callback.takes_context());
    }

    #[test]
    fn plan_rejects_label() {
        let mut controls = Controls::new();
        let (layout, _) = layout_of(&mut controls, vec![ControlSpec::label("L")]);
        let rows = vec![vec![Callback::bound(|| {}).into()]];
        let err = plan_bindings(&layout, &controls, rows).unwrap_err();
        assert!(matches!(
            err,
            GridError::UnsupportedEvent {
                row: 0,
                col: 0,
                kind: crate::control::ControlKind::Label
            }
        ));
    }

    #[test]
    fn plan_rejects_uncovered_cell() {
        let mut controls = Controls::new();
        let (layout, _) = layout_of(&mut controls, vec![ControlSpec::button("B")]);
        let rows = vec![vec![Token::BLANK], vec![Callback::bound(|| {}).into()]];
        assert!(matches!(
            plan_bindings(&layout, &controls, rows),
            Err(GridError::OutOfRange { row: 1, col: 0 })
        ));
    }
}
