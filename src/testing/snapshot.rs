//! Snapshot helpers.
//!
//! Turn a resolved grid into plain text suitable for snapshot testing and
//! assertions.

use crate::grid::{Grid, GridLayout};
use crate::names::NameRegistry;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Draw the layout of `grid` as a text map of identifiers.
///
/// Each matrix row becomes one line. A control's origin cell shows its
/// identifier; the other cells it covers show `<` when continued from the
/// left and `^` when continued from above. Cells no placement covers show
/// `.`. Columns are padded to a common width and lines are right-trimmed.
///
/// # Examples
///
/// ```
/// use guigrid::cell::Token;
/// use guigrid::grid::Grid;
/// use guigrid::testing::grid_to_string;
///
/// let grid = Grid::new(vec![
///     vec![Token::from("Title"), Token::LEFT],
///     vec![Token::button("a"), Token::button("b")],
/// ])
/// .unwrap();
/// assert_eq!(grid_to_string(&grid), "Title <\na     b");
/// ```
pub fn grid_to_string(grid: &Grid) -> String {
    layout_to_string(grid.layout(), grid.name_registry())
}

/// Draw `layout` using the identifiers in `names`.
///
/// Controls with no identifier show `?`.
pub fn layout_to_string(layout: &GridLayout, names: &NameRegistry) -> String {
    let labels: Vec<Vec<String>> = (0..layout.nrows())
        .map(|row| {
            (0..layout.ncols())
                .map(|col| cell_label(layout, names, row, col))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..layout.ncols())
        .map(|col| {
            labels
                .iter()
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    labels
        .iter()
        .map(|row| {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(label, &w)| format!("{label:<w$}"))
                .collect();
            line.join(" ").trim_end().to_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn cell_label(layout: &GridLayout, names: &NameRegistry, row: usize, col: usize) -> String {
    let Ok(placement) = layout.placement_at(row, col) else {
        return ".".to_owned();
    };
    if placement.row == row && placement.col == col {
        names
            .identifier_of(placement.control)
            .unwrap_or("?")
            .to_owned()
    } else if col > placement.col {
        "<".to_owned()
    } else {
        "^".to_owned()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
