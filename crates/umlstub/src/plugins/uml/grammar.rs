//! Grammar matcher for the class notation
//!
//! Each construct (class header, enum header, abstract marker, relationship)
//! has its own chumsky grammar. The matcher runs every grammar separately
//! over the whole document with [`scan`], so each call starts from a fresh
//! cursor and constructs may appear in any order.

use std::collections::HashSet;

use chumsky::prelude::*;
use tracing::trace;

use crate::core::chumsky_utils::{
    identifier, optional_whitespace, quoted_padding, scan, whitespace_required,
};

/// A `class Name [extends Parent] { body }` match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClassMatch<'src> {
    pub name: &'src str,
    pub parent: Option<&'src str>,
    pub body: &'src str,
}

/// An `enum Name { body }` match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EnumMatch<'src> {
    pub name: &'src str,
    pub body: &'src str,
}

/// Relationship multiplicity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Cardinality {
    /// `1`
    One,
    /// `*`
    Many,
}

/// The arrow a relationship was written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RelationKind {
    /// `-->`
    Directed,
    /// `--`
    Plain,
    /// `<--`
    ReverseDirected,
}

impl RelationKind {
    /// Whether both endpoints navigate to each other
    pub fn is_bidirectional(self) -> bool {
        matches!(self, RelationKind::Plain)
    }
}

/// A relationship with `from`/`to` already in logical direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Relation {
    pub from: String,
    pub to: String,
    pub kind: RelationKind,
    pub cardinality_from: Option<Cardinality>,
    pub cardinality_to: Option<Cardinality>,
}

impl Relation {
    /// Build a relation from its written form. `<--` swaps the operands and
    /// their cardinalities so that `from` is always the navigating side.
    fn from_written(
        left: &str,
        left_cardinality: Option<Cardinality>,
        kind: RelationKind,
        right_cardinality: Option<Cardinality>,
        right: &str,
    ) -> Self {
        match kind {
            RelationKind::ReverseDirected => Self {
                from: right.to_string(),
                to: left.to_string(),
                kind,
                cardinality_from: right_cardinality,
                cardinality_to: left_cardinality,
            },
            RelationKind::Directed | RelationKind::Plain => Self {
                from: left.to_string(),
                to: right.to_string(),
                kind,
                cardinality_from: left_cardinality,
                cardinality_to: right_cardinality,
            },
        }
    }
}

/// Scans a document for every construct of the notation
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct GrammarMatcher;

impl GrammarMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Class headers in document order
    pub fn classes<'src>(&self, input: &'src str) -> Vec<ClassMatch<'src>> {
        let found = scan(input, Self::class_parser());
        for class in &found {
            trace!(name = class.name, parent = ?class.parent, "Matched class header");
        }
        found
    }

    /// Enum headers in document order
    pub fn enums<'src>(&self, input: &'src str) -> Vec<EnumMatch<'src>> {
        let found = scan(input, Self::enum_parser());
        for item in &found {
            trace!(name = item.name, "Matched enum header");
        }
        found
    }

    /// Names marked `abstract class` anywhere in the document
    pub fn abstract_classes<'src>(&self, input: &'src str) -> HashSet<&'src str> {
        scan(input, Self::abstract_parser()).into_iter().collect()
    }

    /// Relationships in document order
    pub fn relations(&self, input: &str) -> Vec<Relation> {
        let found = scan(input, Self::relation_parser());
        for rel in &found {
            trace!(from = %rel.from, to = %rel.to, kind = ?rel.kind, "Matched relationship");
        }
        found
    }

    fn class_parser<'src>() -> impl Parser<'src, &'src str, ClassMatch<'src>> + Clone {
        let parent = whitespace_required()
            .ignore_then(just("extends"))
            .ignore_then(whitespace_required())
            .ignore_then(identifier());

        just("class")
            .ignore_then(whitespace_required())
            .ignore_then(identifier())
            .then(parent.or_not())
            .then_ignore(optional_whitespace())
            .then(Self::braced_body())
            .map(|((name, parent), body)| ClassMatch { name, parent, body })
    }

    fn enum_parser<'src>() -> impl Parser<'src, &'src str, EnumMatch<'src>> + Clone {
        just("enum")
            .ignore_then(whitespace_required())
            .ignore_then(identifier())
            .then_ignore(optional_whitespace())
            .then(Self::braced_body())
            .map(|(name, body)| EnumMatch { name, body })
    }

    fn abstract_parser<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
        just("abstract")
            .ignore_then(whitespace_required())
            .ignore_then(just("class"))
            .ignore_then(whitespace_required())
            .ignore_then(identifier())
    }

    /// `{ ... }` with no closing brace inside; yields the text between.
    fn braced_body<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
        just('{')
            .ignore_then(none_of("}").repeated().to_slice())
            .then_ignore(just('}'))
    }

    fn cardinality_parser<'src>() -> impl Parser<'src, &'src str, Cardinality> + Clone {
        just('*')
            .to(Cardinality::Many)
            .or(just('1').to(Cardinality::One))
    }

    fn relation_parser<'src>() -> impl Parser<'src, &'src str, Relation> + Clone {
        // Tried in this order; "--" must come after "-->".
        let arrow = just("-->")
            .to(RelationKind::Directed)
            .or(just("--").to(RelationKind::Plain))
            .or(just("<--").to(RelationKind::ReverseDirected));

        let source = identifier()
            .then_ignore(quoted_padding())
            .then(Self::cardinality_parser().or_not())
            .then_ignore(quoted_padding());

        // A cardinality only counts when an identifier still follows it, so
        // `A -- 1` reads `1` as the target.
        let target_with_cardinality = quoted_padding()
            .ignore_then(Self::cardinality_parser())
            .then_ignore(quoted_padding())
            .then(identifier())
            .map(|(cardinality, name)| (Some(cardinality), name));
        let target_plain = quoted_padding()
            .ignore_then(identifier())
            .map(|name| (None::<Cardinality>, name));
        let target = target_with_cardinality.or(target_plain);

        source.then(arrow).then(target).map(
            |(((left, left_cardinality), kind), (right_cardinality, right))| {
                Relation::from_written(left, left_cardinality, kind, right_cardinality, right)
            },
        )
    }
}
