//! Proc macros for guigrid: `grid!` compact matrix notation.
//!
//! Not meant to be used directly. Enable the `macros` feature on `guigrid`.

use proc_macro::TokenStream;

mod grid_macro;

/// Compact matrix notation for grid layouts.
///
/// Expands to a `Vec<Vec<guigrid::cell::Token>>` ready for `Grid::new`,
/// `Grid::events`, or `Grid::names`.
///
/// # Syntax
///
/// - Each row is a bracketed, comma-separated list of cells.
/// - `_` is a blank cell, `___` continues the cell to the left, `I` continues
///   the cell above.
/// - `[ "text" ]` is a nested list; a list starting with a string becomes a
///   button.
/// - Any other expression is converted with `Token::from`.
///
/// # Example
///
/// ```ignore
/// let rows = grid![
///     ["Name:", "__name__"],
///     [["OK"],  ___],
///     [_,       I],
/// ];
/// ```
#[proc_macro]
pub fn grid(input: TokenStream) -> TokenStream {
    grid_macro::grid_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
