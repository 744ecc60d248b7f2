//! TaffyTree wrapper for grid geometry.
//!
//! [`LayoutEngine`] turns a [`GridLayout`] into a taffy CSS-grid container
//! with one fixed track per row and column and one leaf per placement, runs
//! layout, and reports the result as [`Region`]s.

use std::collections::HashMap;

use taffy::prelude::*;
use tracing::{trace, warn};

use crate::control::ControlId;
use crate::error::{GridError, Result};
use crate::geometry::{Region, Size as CellSize};
use crate::grid::{GridLayout, Placement};

/// Wraps a [`TaffyTree`] and maps each [`ControlId`] to its taffy leaf.
pub struct LayoutEngine {
    /// The taffy tree, with the placed control as context data.
    tree: TaffyTree<ControlId>,
    /// Maps control -> taffy leaf.
    node_map: HashMap<ControlId, taffy::prelude::NodeId>,
    /// The grid container, if a layout has been synced.
    root: Option<taffy::prelude::NodeId>,
}

impl LayoutEngine {
    /// Create a new, empty layout engine.
    pub fn new() -> Self {
        Self {
            tree: TaffyTree::new(),
            node_map: HashMap::new(),
            root: None,
        }
    }

    /// Rebuild the taffy tree from `layout`.
    ///
    /// Every track is `cell_size` wide (or tall) and tracks are separated by
    /// `spacing`. Any previous tree is discarded. On failure the engine is
    /// left empty.
    ///
    /// # Errors
    ///
    /// [`GridError::Layout`] if a placement lies beyond the last grid line
    /// taffy can address, or if taffy rejects the tree.
    pub fn sync_layout(&mut self, layout: &GridLayout, cell_size: CellSize, spacing: u16) -> Result<()> {
        self.clear();
        let result = self.build(layout, cell_size, spacing);
        if let Err(err) = &result {
            warn!(target: "guigrid::layout", %err, "layout sync failed");
            self.clear();
        }
        result
    }

    fn build(&mut self, layout: &GridLayout, cell_size: CellSize, spacing: u16) -> Result<()> {
        let gap = f32::from(spacing);
        let container = Style {
            display: Display::Grid,
            grid_template_columns: (0..layout.ncols())
                .map(|_| length(cell_size.width as f32))
                .collect(),
            grid_template_rows: (0..layout.nrows())
                .map(|_| length(cell_size.height as f32))
                .collect(),
            gap: Size {
                width: length(gap),
                height: length(gap),
            },
            ..Default::default()
        };

        let mut children = Vec::with_capacity(layout.placements().len());
        for placement in layout.placements() {
            let leaf = self
                .tree
                .new_leaf_with_context(placement_style(placement)?, placement.control)
                .map_err(GridError::layout)?;
            self.node_map.insert(placement.control, leaf);
            children.push(leaf);
        }
        let root = self
            .tree
            .new_with_children(container, &children)
            .map_err(GridError::layout)?;
        self.root = Some(root);
        trace!(target: "guigrid::layout", leaves = children.len(), "layout synced");
        Ok(())
    }

    /// Run taffy layout computation within `available` space.
    pub fn compute(&mut self, available: CellSize) {
        if let Some(root) = self.root {
            let space = taffy::geometry::Size {
                width: AvailableSpace::Definite(available.width as f32),
                height: AvailableSpace::Definite(available.height as f32),
            };
            if let Err(err) = self.tree.compute_layout(root, space) {
                warn!(target: "guigrid::layout", %err, "layout computation failed");
            }
        }
    }

    /// The computed region of `control`, rounded to whole units.
    ///
    /// Returns `None` if the control is not in the layout tree.
    pub fn get_layout(&self, control: ControlId) -> Option<Region> {
        let taffy_id = self.node_map.get(&control)?;
        let layout = self.tree.layout(*taffy_id).ok()?;
        Some(to_region(layout))
    }

    /// Regions of all placed controls.
    pub fn get_all_layouts(&self) -> HashMap<ControlId, Region> {
        self.node_map
            .iter()
            .filter_map(|(&control, &taffy_id)| {
                self.tree
                    .layout(taffy_id)
                    .ok()
                    .map(|layout| (control, to_region(layout)))
            })
            .collect()
    }

    /// Number of placed controls in the tree.
    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    /// Whether nothing has been synced.
    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }

    fn clear(&mut self) {
        self.tree.clear();
        self.node_map.clear();
        self.root = None;
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Leaf style: placed at its origin line, spanning its row and column counts.
fn placement_style(p: &Placement) -> Result<Style> {
    Ok(Style {
        grid_row: grid_lines("row", p.row, p.rowspan)?,
        grid_column: grid_lines("column", p.col, p.colspan)?,
        ..Default::default()
    })
}

/// Start line (1-based) and span of one axis. Taffy addresses lines as `i16`.
fn grid_lines(axis: &str, index: usize, count: usize) -> Result<Line<GridPlacement>> {
    let start = index
        .checked_add(1)
        .and_then(|start| i16::try_from(start).ok())
        .ok_or_else(|| GridError::layout(format!("{axis} {index} is beyond grid line {}", i16::MAX)))?;
    let end = u16::try_from(count)
        .map_err(|_| GridError::layout(format!("{axis} span {count} exceeds {}", u16::MAX)))?;
    Ok(Line {
        start: line(start),
        end: span(end),
    })
}

fn to_region(layout: &taffy::Layout) -> Region {
    Region {
        x: layout.location.x.round() as i32,
        y: layout.location.y.round() as i32,
        width: layout.size.width.round() as i32,
        height: layout.size.height.round() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{ControlSpec, Controls};

    fn placement(control: ControlId, row: usize, col: usize, rowspan: usize, colspan: usize) -> Placement {
        Placement {
            control,
            row,
            col,
            rowspan,
            colspan,
        }
    }

    /// A 2x2 grid: a wide header over two single cells.
    fn header_layout() -> (GridLayout, ControlId, ControlId, ControlId) {
        let mut controls = Controls::new();
        let head = controls.insert(ControlSpec::label("head"));
        let a = controls.insert(ControlSpec::button("a"));
        let b = controls.insert(ControlSpec::button("b"));
        let layout = GridLayout::new(
            2,
            2,
            vec![
                placement(head, 0, 0, 1, 2),
                placement(a, 1, 0, 1, 1),
                placement(b, 1, 1, 1, 1),
            ],
        );
        (layout, head, a, b)
    }

    #[test]
    fn new_engine_is_empty() {
        let engine = LayoutEngine::new();
        assert!(engine.is_empty());
        assert!(engine.root.is_none());
    }

    #[test]
    fn default_engine_is_empty() {
        let engine = LayoutEngine::default();
        assert_eq!(engine.len(), 0);
    }

    #[test]
    fn sync_creates_one_leaf_per_placement() {
        let (layout, head, a, b) = header_layout();
        let mut engine = LayoutEngine::new();
        engine.sync_layout(&layout, CellSize::new(10, 1), 0).unwrap();
        assert_eq!(engine.len(), 3);
        assert!(engine.node_map.contains_key(&head));
        assert!(engine.node_map.contains_key(&a));
        assert!(engine.node_map.contains_key(&b));
        let root = engine.root.unwrap();
        assert_eq!(engine.tree.children(root).unwrap().len(), 3);
    }

    #[test]
    fn compute_spanned_regions() {
        let (layout, head, a, b) = header_layout();
        let mut engine = LayoutEngine::new();
        engine.sync_layout(&layout, CellSize::new(10, 2), 0).unwrap();
        engine.compute(CellSize::new(20, 4));

        assert_eq!(engine.get_layout(head), Some(Region::new(0, 0, 20, 2)));
        assert_eq!(engine.get_layout(a), Some(Region::new(0, 2, 10, 2)));
        assert_eq!(engine.get_layout(b), Some(Region::new(10, 2, 10, 2)));
    }

    #[test]
    fn spacing_separates_tracks() {
        let (layout, head, _a, b) = header_layout();
        let mut engine = LayoutEngine::new();
        engine.sync_layout(&layout, CellSize::new(10, 1), 1).unwrap();
        engine.compute(CellSize::new(21, 3));

        assert_eq!(engine.get_layout(head), Some(Region::new(0, 0, 21, 1)));
        assert_eq!(engine.get_layout(b), Some(Region::new(11, 2, 10, 1)));
    }

    #[test]
    fn vertical_span() {
        let mut controls = Controls::new();
        let tall = controls.insert(ControlSpec::label("tall"));
        let top = controls.insert(ControlSpec::label("top"));
        let bottom = controls.insert(ControlSpec::label("bottom"));
        let layout = GridLayout::new(
            2,
            2,
            vec![
                placement(tall, 0, 0, 2, 1),
                placement(top, 0, 1, 1, 1),
                placement(bottom, 1, 1, 1, 1),
            ],
        );
        let mut engine = LayoutEngine::new();
        engine.sync_layout(&layout, CellSize::new(5, 1), 0).unwrap();
        engine.compute(CellSize::new(10, 2));

        assert_eq!(engine.get_layout(tall), Some(Region::new(0, 0, 5, 2)));
        assert_eq!(engine.get_layout(bottom), Some(Region::new(5, 1, 5, 1)));
    }

    #[test]
    fn get_all_layouts() {
        let (layout, head, a, b) = header_layout();
        let mut engine = LayoutEngine::new();
        engine.sync_layout(&layout, CellSize::new(10, 1), 0).unwrap();
        engine.compute(CellSize::new(20, 2));

        let all = engine.get_all_layouts();
        assert_eq!(all.len(), 3);
        assert!(all.contains_key(&head));
        assert!(all.contains_key(&a));
        assert!(all.contains_key(&b));
    }

    #[test]
    fn get_layout_before_sync() {
        let mut controls = Controls::new();
        let id = controls.insert(ControlSpec::label("x"));
        assert!(LayoutEngine::new().get_layout(id).is_none());
    }

    #[test]
    fn resync_replaces_tree() {
        let (layout, ..) = header_layout();
        let mut engine = LayoutEngine::new();
        engine.sync_layout(&layout, CellSize::new(10, 1), 0).unwrap();
        engine
            .sync_layout(&GridLayout::new(0, 0, Vec::new()), CellSize::new(10, 1), 0)
            .unwrap();
        assert!(engine.is_empty());
        assert!(engine.root.is_some());
    }

    #[test]
    fn last_addressable_column_syncs() {
        let mut controls = Controls::new();
        let id = controls.insert(ControlSpec::label("edge"));
        let last = i16::MAX as usize - 1;
        let layout = GridLayout::new(1, last + 1, vec![placement(id, 0, last, 1, 1)]);
        let mut engine = LayoutEngine::new();
        assert_eq!(engine.sync_layout(&layout, CellSize::new(1, 1), 0), Ok(()));
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn column_past_last_grid_line_is_error() {
        let mut controls = Controls::new();
        let id = controls.insert(ControlSpec::label("far"));
        let col = i16::MAX as usize;
        let layout = GridLayout::new(1, col + 1, vec![placement(id, 0, col, 1, 1)]);
        let mut engine = LayoutEngine::new();
        let err = engine.sync_layout(&layout, CellSize::new(1, 1), 0).unwrap_err();
        assert!(matches!(err, GridError::Layout { .. }));
        assert!(engine.is_empty());
        assert!(engine.get_layout(id).is_none());
    }

    #[test]
    fn oversized_span_is_error() {
        let mut controls = Controls::new();
        let id = controls.insert(ControlSpec::label("wide"));
        let layout = GridLayout::new(1, 1, vec![placement(id, 0, 0, 1, u16::MAX as usize + 1)]);
        let mut engine = LayoutEngine::new();
        assert!(matches!(
            engine.sync_layout(&layout, CellSize::new(1, 1), 0),
            Err(GridError::Layout { .. })
        ));
    }

    #[test]
    fn failed_sync_discards_previous_tree() {
        let (layout, head, ..) = header_layout();
        let mut engine = LayoutEngine::new();
        engine.sync_layout(&layout, CellSize::new(10, 1), 0).unwrap();

        let far = GridLayout::new(1, 1, vec![placement(head, 0, i16::MAX as usize, 1, 1)]);
        assert!(engine.sync_layout(&far, CellSize::new(10, 1), 0).is_err());
        assert!(engine.is_empty());
        assert!(engine.root.is_none());
    }
}
