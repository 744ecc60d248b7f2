//! Two-pass matrix resolution.
//!
//! Pass 1 replaces markers: blanks become fresh empty labels, continuations
//! copy the already-resolved neighbour. Pass 2 scans row-major and turns the
//! first occurrence of every control into a [`SlotPlacement`] whose spans are
//! the contiguous runs below and to the right of it.
//!
//! Resolution works on slot indices into a list of pending specs so that a
//! failing matrix never creates a control.

use crate::cell::validate::check_shape;
use crate::cell::Cell;
use crate::control::ControlSpec;
use crate::error::{GridError, Result};

/// How pass 2 treats a control whose cells are not a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanPolicy {
    /// Reject the matrix with [`GridError::IrregularSpan`].
    #[default]
    Strict,
    /// Place the contiguous runs from the first occurrence and skip every
    /// later occurrence. The placements may then leave cells uncovered.
    FirstRun,
}

/// A placement that refers to a pending spec by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPlacement {
    pub slot: usize,
    pub row: usize,
    pub col: usize,
    pub rowspan: usize,
    pub colspan: usize,
}

/// Output of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub nrows: usize,
    pub ncols: usize,
    /// One spec per distinct control, indexed by slot.
    pub specs: Vec<ControlSpec>,
    /// Placements in row-major order of their origin.
    pub placements: Vec<SlotPlacement>,
}

/// Resolve a rectangular matrix of normalized cells.
///
/// Fails with [`GridError::Shape`] before anything else if the matrix is
/// empty or ragged.
pub fn resolve(cells: Vec<Vec<Cell>>, policy: SpanPolicy) -> Result<Resolution> {
    let ncols = check_shape(&cells)?;
    let nrows = cells.len();
    let (specs, slots) = resolve_continuations(cells)?;
    let placements = compute_spans(&slots, specs.len(), policy)?;
    tracing::debug!(
        target: "guigrid::resolve",
        nrows,
        ncols,
        controls = specs.len(),
        "matrix resolved"
    );
    Ok(Resolution {
        nrows,
        ncols,
        specs,
        placements,
    })
}

// ---------------------------------------------------------------------------
// Pass 1
// ---------------------------------------------------------------------------

fn resolve_continuations(cells: Vec<Vec<Cell>>) -> Result<(Vec<ControlSpec>, Vec<Vec<usize>>)> {
    let mut specs = Vec::new();
    let mut slots: Vec<Vec<usize>> = Vec::with_capacity(cells.len());

    for (row, cells_row) in cells.into_iter().enumerate() {
        let mut resolved = Vec::with_capacity(cells_row.len());
        for (col, cell) in cells_row.into_iter().enumerate() {
            let slot = match cell {
                Cell::Widget(spec) => push_spec(&mut specs, spec),
                Cell::Blank => push_spec(&mut specs, ControlSpec::blank()),
                Cell::ContinueLeft => match col.checked_sub(1) {
                    Some(left) => resolved[left],
                    None => {
                        return Err(GridError::Continuation {
                            row,
                            col,
                            direction: "left",
                        })
                    }
                },
                Cell::ContinueUp => match row.checked_sub(1) {
                    Some(up) => slots[up][col],
                    None => {
                        return Err(GridError::Continuation {
                            row,
                            col,
                            direction: "upper",
                        })
                    }
                },
            };
            resolved.push(slot);
        }
        slots.push(resolved);
    }
    Ok((specs, slots))
}

fn push_spec(specs: &mut Vec<ControlSpec>, spec: ControlSpec) -> usize {
    specs.push(spec);
    specs.len() - 1
}

// ---------------------------------------------------------------------------
// Pass 2
// ---------------------------------------------------------------------------

fn compute_spans(slots: &[Vec<usize>], count: usize, policy: SpanPolicy) -> Result<Vec<SlotPlacement>> {
    let nrows = slots.len();
    let ncols = slots.first().map_or(0, Vec::len);

    let mut occurrences = vec![0usize; count];
    for &slot in slots.iter().flatten() {
        occurrences[slot] += 1;
    }

    let mut placed = vec![false; count];
    let mut placements = Vec::with_capacity(count);

    for row in 0..nrows {
        for col in 0..ncols {
            let slot = slots[row][col];
            if placed[slot] {
                continue;
            }
            let rowspan = (row..nrows).take_while(|&r| slots[r][col] == slot).count();
            let colspan = (col..ncols).take_while(|&c| slots[row][c] == slot).count();

            if policy == SpanPolicy::Strict {
                let filled = (row..row + rowspan)
                    .all(|r| (col..col + colspan).all(|c| slots[r][c] == slot));
                if !filled || occurrences[slot] != rowspan * colspan {
                    return Err(GridError::IrregularSpan { row, col });
                }
            }

            tracing::trace!(target: "guigrid::resolve", row, col, rowspan, colspan, "placement");
            placements.push(SlotPlacement {
                slot,
                row,
                col,
                rowspan,
                colspan,
            });
            placed[slot] = true;
        }
    }
    Ok(placements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn w(text: &str) -> Cell {
        Cell::Widget(ControlSpec::label(text))
    }

    fn spans(res: &Resolution) -> Vec<(usize, usize, usize, usize)> {
        res.placements
            .iter()
            .map(|p| (p.row, p.col, p.rowspan, p.colspan))
            .collect()
    }

    // ── Shape ────────────────────────────────────────────────────────

    #[test]
    fn ragged_matrix_is_shape_error() {
        let cells = vec![vec![w("a")], vec![w("b"), Cell::ContinueUp]];
        assert!(matches!(
            resolve(cells, SpanPolicy::Strict),
            Err(GridError::Shape { .. })
        ));
    }

    #[test]
    fn short_later_row_is_shape_error() {
        let cells = vec![vec![w("a"), w("b")], vec![Cell::ContinueUp]];
        assert!(matches!(
            resolve(cells, SpanPolicy::FirstRun),
            Err(GridError::Shape { .. })
        ));
    }

    #[test]
    fn empty_matrix_is_shape_error() {
        assert!(matches!(
            resolve(Vec::new(), SpanPolicy::Strict),
            Err(GridError::Shape { .. })
        ));
    }

    // ── Pass 1 ───────────────────────────────────────────────────────

    #[test]
    fn continue_left_at_first_column_fails() {
        let err = resolve(vec![vec![Cell::ContinueLeft]], SpanPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            GridError::Continuation {
                row: 0,
                col: 0,
                direction: "left"
            }
        );
    }

    #[test]
    fn continue_up_at_first_row_fails() {
        let err = resolve(vec![vec![w("a"), Cell::ContinueUp]], SpanPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            GridError::Continuation {
                row: 0,
                col: 1,
                direction: "upper"
            }
        );
    }

    #[test]
    fn blanks_are_independent() {
        let res = resolve(vec![vec![Cell::Blank, Cell::Blank]], SpanPolicy::Strict).unwrap();
        assert_eq!(res.specs, vec![ControlSpec::blank(), ControlSpec::blank()]);
        assert_eq!(spans(&res), vec![(0, 0, 1, 1), (0, 1, 1, 1)]);
    }

    #[test]
    fn continuation_of_blank_spans_it() {
        let res = resolve(vec![vec![Cell::Blank, Cell::ContinueLeft]], SpanPolicy::Strict).unwrap();
        assert_eq!(res.specs.len(), 1);
        assert_eq!(spans(&res), vec![(0, 0, 1, 2)]);
    }

    // ── Pass 2 ───────────────────────────────────────────────────────

    #[test]
    fn horizontal_span() {
        let res = resolve(vec![vec![w("A"), Cell::ContinueLeft]], SpanPolicy::Strict).unwrap();
        assert_eq!(spans(&res), vec![(0, 0, 1, 2)]);
        assert_eq!(res.specs[0].text, "A");
    }

    #[test]
    fn vertical_span() {
        let res = resolve(vec![vec![w("X")], vec![Cell::ContinueUp]], SpanPolicy::Strict).unwrap();
        assert_eq!(spans(&res), vec![(0, 0, 2, 1)]);
    }

    #[test]
    fn block_span() {
        let cells = vec![
            vec![w("big"), Cell::ContinueLeft, w("r")],
            vec![Cell::ContinueUp, Cell::ContinueUp, w("s")],
        ];
        let res = resolve(cells, SpanPolicy::Strict).unwrap();
        assert_eq!(spans(&res), vec![(0, 0, 2, 2), (0, 2, 1, 1), (1, 2, 1, 1)]);
        assert_eq!(res.ncols, 3);
        assert_eq!(res.nrows, 2);
    }

    #[test]
    fn block_built_from_left_continuations() {
        let cells = vec![
            vec![w("big"), Cell::ContinueLeft],
            vec![Cell::ContinueUp, Cell::ContinueLeft],
        ];
        let res = resolve(cells, SpanPolicy::Strict).unwrap();
        assert_eq!(spans(&res), vec![(0, 0, 2, 2)]);
    }

    #[test]
    fn l_shape_rejected_when_strict() {
        let cells = vec![
            vec![w("L"), Cell::ContinueLeft],
            vec![Cell::ContinueUp, Cell::Blank],
        ];
        assert_eq!(
            resolve(cells, SpanPolicy::Strict),
            Err(GridError::IrregularSpan { row: 0, col: 0 })
        );
    }

    #[test]
    fn l_shape_first_run_leaves_gap() {
        let cells = vec![
            vec![w("L"), Cell::ContinueLeft],
            vec![Cell::ContinueUp, Cell::Blank],
        ];
        let res = resolve(cells, SpanPolicy::FirstRun).unwrap();
        // The L covers (0,0),(0,1),(1,0); its scan yields a 2x2 claim.
        assert_eq!(spans(&res), vec![(0, 0, 2, 2), (1, 1, 1, 1)]);
    }

    #[test]
    fn staircase_rejected_when_strict() {
        let cells = vec![
            vec![w("S"), Cell::ContinueLeft, w("t")],
            vec![w("u"), Cell::ContinueUp, Cell::ContinueLeft],
        ];
        assert_eq!(
            resolve(cells, SpanPolicy::Strict),
            Err(GridError::IrregularSpan { row: 0, col: 0 })
        );
    }
}
