//! Class notation detector
//!
//! Identifies class notation by running the notation's own grammars over the
//! input, so anything the parser accepts is also detected.

use super::grammar::GrammarMatcher;
use crate::core::Detector;

/// A grammar the detector tries, with the confidence a match earns
struct Signal {
    pattern: &'static str,
    confidence: f64,
    matches: fn(&GrammarMatcher, &str) -> bool,
}

/// Tried in order; the first match decides the confidence.
const SIGNALS: &[Signal] = &[
    Signal {
        pattern: "class <Name> [extends <Parent>] { ... }",
        confidence: 0.8,
        matches: has_class,
    },
    Signal {
        pattern: "enum <Name> { ... }",
        confidence: 0.8,
        matches: has_enum,
    },
    Signal {
        pattern: "abstract class <Name>",
        confidence: 0.6,
        matches: has_abstract_marker,
    },
    // Relationships alone render nothing
    Signal {
        pattern: "<A> [\"1\"|\"*\"] (--|-->|<--) [\"1\"|\"*\"] <B>",
        confidence: 0.3,
        matches: has_relation,
    },
];

fn has_class(grammar: &GrammarMatcher, input: &str) -> bool {
    !grammar.classes(input).is_empty()
}

fn has_enum(grammar: &GrammarMatcher, input: &str) -> bool {
    !grammar.enums(input).is_empty()
}

fn has_abstract_marker(grammar: &GrammarMatcher, input: &str) -> bool {
    !grammar.abstract_classes(input).is_empty()
}

fn has_relation(grammar: &GrammarMatcher, input: &str) -> bool {
    !grammar.relations(input).is_empty()
}

/// Detector for the class notation
#[derive(Debug, Clone, Copy, Default)]
pub struct UmlDetector {
    grammar: GrammarMatcher,
}

impl UmlDetector {
    pub fn new() -> Self {
        Self {
            grammar: GrammarMatcher::new(),
        }
    }
}

impl Detector for UmlDetector {
    fn detect(&self, input: &str) -> bool {
        self.confidence(input) > 0.5
    }

    fn confidence(&self, input: &str) -> f64 {
        SIGNALS
            .iter()
            .find(|signal| (signal.matches)(&self.grammar, input))
            .map_or(0.0, |signal| signal.confidence)
    }

    fn diagram_type(&self) -> &'static str {
        "uml"
    }

    fn patterns(&self) -> Vec<&'static str> {
        SIGNALS.iter().map(|signal| signal.pattern).collect()
    }
}
