//! Shared chumsky parser utilities
//!
//! Small combinators used by every grammar, plus [`scan`], which runs a
//! grammar over a whole document and collects every non-overlapping match.

use chumsky::prelude::*;

/// Parse an identifier token: one or more ASCII letters, digits or `_`.
///
/// Unlike `chumsky::text::ident` a leading digit is allowed, so `1` is a
/// valid identifier on its own.
pub fn identifier<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    any()
        .filter(|c: &char| c.is_ascii_alphanumeric() || *c == '_')
        .repeated()
        .at_least(1)
        .to_slice()
}

/// Parse optional whitespace, newlines included.
pub fn optional_whitespace<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    any()
        .filter(|c: &char| c.is_whitespace())
        .repeated()
        .ignored()
}

/// Parse required whitespace (at least one character), newlines included.
pub fn whitespace_required<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    any()
        .filter(|c: &char| c.is_whitespace())
        .repeated()
        .at_least(1)
        .ignored()
}

/// Parse any run of whitespace and double quotes.
///
/// Relationship lines wrap cardinalities in quotes (`A "*" --> B`), so the
/// padding around an arrow is a mix of both.
pub fn quoted_padding<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    any()
        .filter(|c: &char| *c == '"' || c.is_whitespace())
        .repeated()
        .ignored()
}

/// Collect every match of `parser` in `input`, left to right.
///
/// The cursor is local to this call: at each position the grammar is tried
/// against the remaining text; a match is recorded and scanning resumes at
/// its end, otherwise the cursor moves forward one character. Matches never
/// overlap and no state survives the call.
pub fn scan<'src, O, P>(input: &'src str, parser: P) -> Vec<O>
where
    P: Parser<'src, &'src str, O>,
{
    let located = parser.map_with(|out, e| (out, e.span())).lazy();

    let mut matches = Vec::new();
    let mut cursor = 0;

    while cursor < input.len() {
        let rest = &input[cursor..];
        match located.parse(rest).into_result() {
            Ok((out, span)) if span.end > 0 => {
                matches.push(out);
                cursor += span.end;
            }
            _ => {
                cursor += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    matches
}
