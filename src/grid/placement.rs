//! Placements and the tiled layout they form.

use crate::control::ControlId;
use crate::error::{GridError, Result};

/// Where a control sits in the grid: origin cell plus spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// The placed control.
    pub control: ControlId,
    /// Origin row.
    pub row: usize,
    /// Origin column.
    pub col: usize,
    /// Number of rows covered (at least 1).
    pub rowspan: usize,
    /// Number of columns covered (at least 1).
    pub colspan: usize,
}

impl Placement {
    /// Whether this placement covers the cell (row, col).
    pub fn occupies(&self, row: usize, col: usize) -> bool {
        row >= self.row
            && row < self.row + self.rowspan
            && col >= self.col
            && col < self.col + self.colspan
    }

    /// Number of cells covered.
    pub fn area(&self) -> usize {
        self.rowspan * self.colspan
    }

    /// Every (row, col) covered, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.row..self.row + self.rowspan)
            .flat_map(move |r| (self.col..self.col + self.colspan).map(move |c| (r, c)))
    }
}

/// The resolved layout of a grid: its shape and every placement, in the
/// row-major order of their origin cells.
///
/// This is what a host toolkit needs to build its own grid container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    nrows: usize,
    ncols: usize,
    placements: Vec<Placement>,
}

impl GridLayout {
    /// Assemble a layout from its parts.
    pub fn new(nrows: usize, ncols: usize, placements: Vec<Placement>) -> Self {
        Self {
            nrows,
            ncols,
            placements,
        }
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// All placements.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The placement covering (row, col).
    pub fn placement_at(&self, row: usize, col: usize) -> Result<&Placement> {
        self.placements
            .iter()
            .find(|p| p.occupies(row, col))
            .ok_or(GridError::OutOfRange { row, col })
    }

    /// The control covering (row, col).
    pub fn control_at(&self, row: usize, col: usize) -> Result<ControlId> {
        self.placement_at(row, col).map(|p| p.control)
    }

    /// The placement of `control`, if it is placed.
    pub fn placement_of(&self, control: ControlId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.control == control)
    }

    /// Whether the placements cover every cell exactly once.
    pub fn is_tiled(&self) -> bool {
        let mut seen = vec![false; self.nrows * self.ncols];
        for p in &self.placements {
            for (r, c) in p.cells() {
                if r >= self.nrows || c >= self.ncols {
                    return false;
                }
                let slot = &mut seen[r * self.ncols + c];
                if *slot {
                    return false;
                }
                *slot = true;
            }
        }
        seen.into_iter().all(|s| s)
    }
}
