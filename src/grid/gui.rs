//! The [`Grid`]: a resolved control matrix with names and event bindings.

use std::collections::BTreeMap;

use tracing::debug;

use crate::app::{GridConfig, Host, Window};
use crate::cell::{normalize_rows, validate, Accept, Cell, Token};
use crate::control::{Control, ControlId, Controls};
use crate::error::{GridError, Result};
use crate::event::{plan_bindings, Connections};
use crate::names::{import_into, AttributeTarget, NameRegistry};

use super::placement::{GridLayout, Placement};
use super::resolve::resolve;

/// A control grid built from a matrix of cell tokens.
///
/// Construction normalizes the compact notation, validates the matrix,
/// resolves continuations into spans, creates one control per distinct cell
/// run, and names each control after its display text. Events and aliases are
/// added afterwards with [`events`](Self::events) and [`names`](Self::names).
///
/// # Examples
///
/// ```
/// use guigrid::cell::Token;
/// use guigrid::grid::Grid;
///
/// let grid = Grid::new(vec![
///     vec![Token::from("Name:"), Token::from("__name__")],
///     vec![Token::button("OK"), Token::LEFT],
/// ])
/// .unwrap();
///
/// let ok = grid.resolve("OK").unwrap();
/// assert_eq!(grid.get(1, 1).unwrap(), ok);
/// ```
pub struct Grid {
    config: GridConfig,
    controls: Controls,
    layout: GridLayout,
    names: NameRegistry,
    connections: Connections,
}

impl Grid {
    /// Build a grid with the default configuration.
    pub fn new(rows: Vec<Vec<Token>>) -> Result<Self> {
        Self::with_config(rows, GridConfig::default())
    }

    /// Build a grid with an explicit configuration.
    ///
    /// Fails before any control exists if the matrix is malformed, holds a
    /// value that is not a control or marker, continues from nowhere, or (under
    /// [`SpanPolicy::Strict`](super::SpanPolicy::Strict)) repeats a control
    /// over a non-rectangular region.
    pub fn with_config(mut rows: Vec<Vec<Token>>, config: GridConfig) -> Result<Self> {
        normalize_rows(&mut rows);
        validate(&rows, Accept::Control)?;
        let cells = into_cells(rows)?;
        let resolution = resolve(cells, config.span_policy)?;

        let mut controls = Controls::new();
        let ids: Vec<ControlId> = resolution
            .specs
            .into_iter()
            .map(|spec| controls.insert(spec))
            .collect();

        let mut names = NameRegistry::new();
        let mut placements = Vec::with_capacity(resolution.placements.len());
        for p in resolution.placements {
            let control = ids[p.slot];
            if let Some(c) = controls.get(control) {
                names.register(control, &c.text());
            }
            placements.push(Placement {
                control,
                row: p.row,
                col: p.col,
                rowspan: p.rowspan,
                colspan: p.colspan,
            });
        }

        debug!(
            target: "guigrid::resolve",
            nrows = resolution.nrows,
            ncols = resolution.ncols,
            controls = controls.len(),
            "grid built"
        );

        Ok(Self {
            config,
            controls,
            layout: GridLayout::new(resolution.nrows, resolution.ncols, placements),
            names,
            connections: Connections::new(),
        })
    }

    // ── Configuration layers ─────────────────────────────────────────

    /// Attach callbacks to the default signals of the controls at the same
    /// coordinates. Markers are skipped. Connections accumulate across calls.
    ///
    /// Nothing is connected unless every callback can be bound.
    pub fn events(&mut self, rows: Vec<Vec<Token>>) -> Result<()> {
        validate(&rows, Accept::Callback)?;
        let plan = plan_bindings(&self.layout, &self.controls, rows)?;
        let count = plan.len();
        for binding in plan {
            self.connections
                .connect(binding.control, binding.signal, binding.callback);
        }
        debug!(target: "guigrid::event", count, "events bound");
        Ok(())
    }

    /// Give the controls at the same coordinates an alias. Markers are
    /// skipped. Reusing an alias points it at the new control.
    ///
    /// No alias is set unless every cell can be aliased.
    pub fn names(&mut self, rows: Vec<Vec<Token>>) -> Result<()> {
        validate(&rows, Accept::Text)?;
        let mut plan = Vec::new();
        for (row, cells) in rows.into_iter().enumerate() {
            for (col, token) in cells.into_iter().enumerate() {
                let Token::Text(alias) = token else {
                    continue;
                };
                let control = self.layout.control_at(row, col)?;
                let identifier = self
                    .names
                    .identifier_of(control)
                    .ok_or_else(|| GridError::Lookup {
                        alias: alias.clone(),
                        target: format!("({row}, {col})"),
                    })?
                    .to_owned();
                plan.push((alias, identifier));
            }
        }
        let count = plan.len();
        for (alias, identifier) in plan {
            self.names.alias(alias, &identifier)?;
        }
        debug!(target: "guigrid::names", count, "aliases set");
        Ok(())
    }

    /// Color hook. Accepts any well-formed matrix and changes nothing.
    pub fn colors(&mut self, rows: Vec<Vec<Token>>) -> Result<()> {
        validate(&rows, Accept::Any)?;
        debug!(target: "guigrid::app", "colors hook ignored");
        Ok(())
    }

    /// Group hook. Accepts any well-formed matrix and changes nothing.
    pub fn groups(&mut self, rows: Vec<Vec<Token>>) -> Result<()> {
        validate(&rows, Accept::Any)?;
        debug!(target: "guigrid::app", "groups hook ignored");
        Ok(())
    }

    /// Group-wide command hook. Changes nothing.
    pub fn all(&self, group: &str) {
        debug!(target: "guigrid::app", group, "all hook ignored");
    }

    // ── Lookup ───────────────────────────────────────────────────────

    /// The control covering (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<ControlId> {
        self.layout.control_at(row, col)
    }

    /// The control named `name`, by alias first, then by identifier.
    pub fn resolve(&self, name: &str) -> Result<ControlId> {
        self.names.resolve(name)
    }

    /// Access a control by handle.
    pub fn control(&self, id: ControlId) -> Option<&Control> {
        self.controls.get(id)
    }

    /// Access a control by name.
    pub fn named(&self, name: &str) -> Result<&Control> {
        let id = self.resolve(name)?;
        self.controls
            .get(id)
            .ok_or_else(|| GridError::NotFound(name.to_owned()))
    }

    /// The identifier derived for `control`.
    pub fn identifier_of(&self, control: ControlId) -> Option<&str> {
        self.names.identifier_of(control)
    }

    /// Every identifier, sorted.
    pub fn identifiers(&self) -> BTreeMap<&str, ControlId> {
        self.names.identifiers()
    }

    /// Every alias and the identifier it points at, sorted.
    pub fn aliases(&self) -> BTreeMap<&str, &str> {
        self.names.aliases()
    }

    /// The name table.
    pub fn name_registry(&self) -> &NameRegistry {
        &self.names
    }

    /// The resolved layout.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// All placements, row-major by origin.
    pub fn placements(&self) -> &[Placement] {
        self.layout.placements()
    }

    /// `(nrows, ncols)` of the construction matrix.
    pub fn shape(&self) -> (usize, usize) {
        (self.layout.nrows(), self.layout.ncols())
    }

    /// The configuration this grid was built with.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of controls.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether the grid has no controls. Never true for a built grid.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Copy every identifier and alias onto `target`.
    ///
    /// All-or-nothing: on a name collision nothing is copied and
    /// [`GridError::DuplicateAttribute`] names the first collision.
    pub fn import_into<T: AttributeTarget + ?Sized>(&self, target: &mut T) -> Result<usize> {
        import_into(&self.names, target)
    }

    // ── Signals ──────────────────────────────────────────────────────

    /// Fire the default signal of `control`, invoking every connected
    /// callback in connection order. Returns how many ran.
    pub fn emit(&self, control: ControlId) -> Result<usize> {
        let c = self
            .controls
            .get(control)
            .ok_or_else(|| GridError::NotFound(format!("{control:?}")))?;
        let kind = c.kind();
        let Some(signal) = kind.default_signal() else {
            return Err(self.unsupported_event(control));
        };
        let callbacks = self.connections.callbacks(control, signal);
        tracing::trace!(target: "guigrid::event", %signal, count = callbacks.len(), "emit");
        for callback in &callbacks {
            callback.invoke(self);
        }
        Ok(callbacks.len())
    }

    /// The error for a signal `control` does not have, located at the
    /// control's placement origin. A control without a placement is
    /// [`GridError::NotFound`].
    pub(crate) fn unsupported_event(&self, control: ControlId) -> GridError {
        let not_found = || GridError::NotFound(format!("{control:?}"));
        let Some(kind) = self.controls.get(control).map(Control::kind) else {
            return not_found();
        };
        match self.layout.placement_of(control) {
            Some(p) => GridError::UnsupportedEvent {
                row: p.row,
                col: p.col,
                kind,
            },
            None => not_found(),
        }
    }

    /// Number of callbacks connected to `control`.
    pub fn connection_count(&self, control: ControlId) -> usize {
        self.connections.count(control)
    }

    // ── Host ─────────────────────────────────────────────────────────

    /// Package the layout for a host window.
    pub fn window(&self) -> Window {
        Window::new(&self.config, self.layout.clone())
    }

    /// Hand the window to `host` and block until the host returns.
    pub fn run<H: Host + ?Sized>(&self, host: &mut H) -> std::result::Result<(), H::Error> {
        debug!(target: "guigrid::app", title = ?self.config.title, "running host");
        host.run(self, self.window())
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("shape", &self.shape())
            .field("controls", &self.controls.len())
            .field("connections", &self.connections.len())
            .finish()
    }
}

fn into_cells(rows: Vec<Vec<Token>>) -> Result<Vec<Vec<Cell>>> {
    rows.into_iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .into_iter()
                .enumerate()
                .map(|(col, token)| {
                    let found = token.describe();
                    Cell::from_token(token).ok_or(GridError::Element {
                        row,
                        col,
                        expected: Accept::Control.expected(),
                        found,
                    })
                })
                .collect()
        })
        .collect()
}
