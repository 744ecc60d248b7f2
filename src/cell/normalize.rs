//! Compact notation expansion.
//!
//! Three rewrite rules run in order over the same token, each seeing the
//! output of the previous one:
//!
//! 1. a string not starting with `__` becomes a label;
//! 2. a list whose first element is a string becomes a button with that text;
//! 3. a string starting and ending with `__` (at least four characters) becomes
//!    a text entry whose placeholder is the whole string.
//!
//! Anything else passes through untouched and is left for the validator.

use crate::control::ControlSpec;

use super::token::Token;

/// Prefix and suffix that mark a text entry.
const ENTRY_DELIMITER: &str = "__";

type Rule = fn(Token) -> Token;

const RULES: [Rule; 3] = [compact_label, compact_button, compact_entry];

/// Expand compact notation in a single token.
pub fn normalize(token: Token) -> Token {
    RULES.iter().fold(token, |token, rule| rule(token))
}

/// Expand compact notation in every cell of a matrix, in place.
pub fn normalize_rows(rows: &mut [Vec<Token>]) {
    for row in rows.iter_mut() {
        for cell in row.iter_mut() {
            let token = std::mem::replace(cell, Token::BLANK);
            *cell = normalize(token);
        }
    }
}

fn compact_label(token: Token) -> Token {
    match token {
        Token::Text(s) if !s.starts_with(ENTRY_DELIMITER) => ControlSpec::label(s).into(),
        other => other,
    }
}

fn compact_button(token: Token) -> Token {
    match token {
        Token::List(mut items) if matches!(items.first(), Some(Token::Text(_))) => {
            match items.swap_remove(0) {
                Token::Text(s) => ControlSpec::button(s).into(),
                other => other,
            }
        }
        other => other,
    }
}

fn compact_entry(token: Token) -> Token {
    match token {
        Token::Text(s) if is_entry_text(&s) => ControlSpec::entry(s).into(),
        other => other,
    }
}

fn is_entry_text(s: &str) -> bool {
    s.len() >= 2 * ENTRY_DELIMITER.len()
        && s.starts_with(ENTRY_DELIMITER)
        && s.ends_with(ENTRY_DELIMITER)
}
