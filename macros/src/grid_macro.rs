//! grid! macro: parse compact matrix notation and generate a token matrix.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{bracketed, Error, Expr, Ident, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// One parsed cell.
#[derive(Clone)]
pub(crate) enum Cell {
    /// `_`
    Blank,
    /// `___`
    Left,
    /// `I`
    Up,
    /// `[ ... ]`, a nested list (a button when its first element is a string).
    List(Vec<Cell>),
    /// Anything else, converted with `Token::from`.
    Expr(Box<Expr>),
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Blank => f.write_str("Blank"),
            Cell::Left => f.write_str("Left"),
            Cell::Up => f.write_str("Up"),
            Cell::List(items) => f.debug_tuple("List").field(items).finish(),
            Cell::Expr(expr) => write!(f, "Expr({})", quote!(#expr)),
        }
    }
}

/// The top-level grid! input: a sequence of bracketed rows.
#[derive(Debug)]
struct GridInput {
    rows: Vec<Vec<Cell>>,
}

/// Identifier spelling of the continue-left marker.
const LEFT_MARKER: &str = "___";
/// Identifier spelling of the continue-up marker.
const UP_MARKER: &str = "I";

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for GridInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let rows = Punctuated::<Row, Token![,]>::parse_terminated(input)?;
        Ok(GridInput {
            rows: rows.into_iter().map(|r| r.0).collect(),
        })
    }
}

struct Row(Vec<Cell>);

impl Parse for Row {
    fn parse(input: ParseStream) -> Result<Self> {
        if !input.peek(syn::token::Bracket) {
            return Err(input.error("expected a `[ ... ]` row"));
        }
        let content;
        bracketed!(content in input);
        Ok(Row(parse_cells(&content)?))
    }
}

fn parse_cells(input: ParseStream) -> Result<Vec<Cell>> {
    let cells = Punctuated::<Cell, Token![,]>::parse_terminated(input)?;
    Ok(cells.into_iter().collect())
}

impl Parse for Cell {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(Token![_]) {
            input.parse::<Token![_]>()?;
            return Ok(Cell::Blank);
        }

        if input.peek(syn::token::Bracket) {
            let content;
            bracketed!(content in input);
            return Ok(Cell::List(parse_cells(&content)?));
        }

        // A marker identifier only counts when it stands alone in the cell.
        if input.peek(Ident) {
            let fork = input.fork();
            let ident: Ident = fork.parse()?;
            if fork.is_empty() || fork.peek(Token![,]) {
                let marker = if ident == LEFT_MARKER {
                    Some(Cell::Left)
                } else if ident == UP_MARKER {
                    Some(Cell::Up)
                } else {
                    None
                };
                if let Some(marker) = marker {
                    input.parse::<Ident>()?;
                    return Ok(marker);
                }
            }
        }

        Ok(Cell::Expr(Box::new(input.parse()?)))
    }
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

/// Generate the `Token` expression for a single cell.
fn generate_cell(cell: &Cell) -> TokenStream {
    match cell {
        Cell::Blank => quote! { ::guigrid::cell::Token::BLANK },
        Cell::Left => quote! { ::guigrid::cell::Token::LEFT },
        Cell::Up => quote! { ::guigrid::cell::Token::UP },
        Cell::List(items) => {
            let items = items.iter().map(generate_cell);
            quote! { ::guigrid::cell::Token::List(::std::vec![#(#items),*]) }
        }
        Cell::Expr(expr) => quote! { ::guigrid::cell::Token::from(#expr) },
    }
}

/// Entry point: generate code for the entire grid! macro.
pub(crate) fn grid_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: GridInput = syn::parse2(input)?;

    if parsed.rows.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            "grid! macro requires at least one row",
        ));
    }

    let rows = parsed.rows.iter().map(|row| {
        let cells = row.iter().map(generate_cell);
        quote! { ::std::vec![#(#cells),*] }
    });

    Ok(quote! {
        {
            let __rows: ::std::vec::Vec<::std::vec::Vec<::guigrid::cell::Token>> =
                ::std::vec![#(#rows),*];
            __rows
        }
    })
}

// ===========================================================================
// Tests
// ===========================================================================
