//! Class body member parser
//!
//! Splits a class body into lines and classifies each one as a method or an
//! attribute. Anything else is dropped without complaint.

use chumsky::prelude::*;
use tracing::trace;

use super::database::{Attribute, Method, Visibility};
use crate::core::chumsky_utils::{identifier, optional_whitespace, whitespace_required};

/// A single classified body line
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Member {
    Attribute(Attribute),
    Method(Method),
}

/// Members of one class body, each list in body order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ParsedMembers {
    pub attributes: Vec<Attribute>,
    pub methods: Vec<Method>,
}

impl ParsedMembers {
    fn push(&mut self, member: Member) {
        match member {
            Member::Attribute(attribute) => self.attributes.push(attribute),
            Member::Method(method) => self.methods.push(method),
        }
    }
}

/// Raw pieces of a method line: visibility, return type, name, parameters
type MethodParts<'src> = (Option<char>, Option<&'src str>, &'src str, &'src str);

/// Parser for the lines of a class body
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MemberParser;

impl MemberParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse every line of `body`. `class_name` identifies constructors.
    pub fn parse_body(&self, body: &str, class_name: &str) -> ParsedMembers {
        let mut members = ParsedMembers::default();

        for line in body.lines().map(str::trim) {
            if line.is_empty() {
                continue;
            }

            if let Some(member) = self.parse_line(line, class_name) {
                members.push(member);
                continue;
            }

            // Several members written on one line: `+int age -String name`
            let segments = split_segments(line);
            if segments.len() > 1 {
                for segment in segments {
                    match self.parse_line(segment, class_name) {
                        Some(member) => members.push(member),
                        None => trace!(class = class_name, segment, "Skipping segment"),
                    }
                }
            } else {
                trace!(class = class_name, line, "Skipping line");
            }
        }

        members
    }

    /// Classify one trimmed line. Methods take precedence over attributes.
    pub fn parse_line(&self, line: &str, class_name: &str) -> Option<Member> {
        if let Ok((visibility, return_type, name, parameters)) =
            Self::method_parser().parse(line).into_result()
        {
            let visibility = Visibility::from_symbol(visibility);
            let method = if name == class_name {
                Method::constructor(visibility, name, parameters)
            } else {
                Method::new(visibility, return_type.unwrap_or("void"), name, parameters)
            };
            return Some(Member::Method(method));
        }

        if let Ok((visibility, type_name, name)) =
            Self::attribute_parser().parse(line).into_result()
        {
            return Some(Member::Attribute(Attribute::new(
                Visibility::from_symbol(visibility),
                type_name,
                name,
            )));
        }

        None
    }

    fn visibility_parser<'src>() -> impl Parser<'src, &'src str, Option<char>> + Clone {
        one_of("+-#").or_not().then_ignore(optional_whitespace())
    }

    /// `[vis] [type ]name(params)`
    fn method_parser<'src>() -> impl Parser<'src, &'src str, MethodParts<'src>> + Clone {
        let typed = identifier()
            .then_ignore(whitespace_required())
            .then(identifier())
            .map(|(return_type, name)| (Some(return_type), name));
        let untyped = identifier().map(|name| (None::<&str>, name));

        let parameters = just('(')
            .ignore_then(none_of(")").repeated().to_slice())
            .then_ignore(just(')'));

        Self::visibility_parser()
            .then(typed.or(untyped))
            .then(parameters)
            .then_ignore(end())
            .map(|((visibility, (return_type, name)), parameters)| {
                (visibility, return_type, name, parameters)
            })
    }

    /// `[vis] type name`
    fn attribute_parser<'src>(
    ) -> impl Parser<'src, &'src str, (Option<char>, &'src str, &'src str)> + Clone {
        Self::visibility_parser()
            .then(identifier())
            .then_ignore(whitespace_required())
            .then(identifier())
            .then_ignore(end())
            .map(|((visibility, type_name), name)| (visibility, type_name, name))
    }
}

/// Split a line before each visibility symbol that follows whitespace,
/// ignoring symbols inside parentheses.
fn split_segments(line: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut after_space = false;

    for (i, c) in line.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '+' | '-' | '#' if depth == 0 && after_space => {
                segments.push(line[start..i].trim());
                start = i;
            }
            _ => {}
        }
        after_space = c.is_whitespace();
    }
    segments.push(line[start..].trim());

    segments.retain(|s| !s.is_empty());
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(visibility: Visibility, type_name: &str, name: &str) -> Attribute {
        Attribute::new(visibility, type_name, name)
    }

    #[test]
    fn test_attribute_lines() {
        let parser = MemberParser::new();
        let members = parser.parse_body("\n  +int age\n  -String name\n  #double weight\n  boolean alive\n", "Animal");

        assert_eq!(
            members.attributes,
            vec![
                attr(Visibility::Public, "int", "age"),
                attr(Visibility::Private, "String", "name"),
                attr(Visibility::Protected, "double", "weight"),
                attr(Visibility::Public, "boolean", "alive"),
            ]
        );
        assert!(members.methods.is_empty());
    }

    #[test]
    fn test_members_on_one_line() {
        let parser = MemberParser::new();
        let members = parser.parse_body(" +int age -String name ", "Animal");

        assert_eq!(
            members.attributes,
            vec![
                attr(Visibility::Public, "int", "age"),
                attr(Visibility::Private, "String", "name"),
            ]
        );
    }

    #[test]
    fn test_method_lines() {
        let parser = MemberParser::new();
        let members = parser.parse_body(
            "+void eat(String food)\n-int count()\nsleep()\n# String describe(int depth, boolean short)",
            "Animal",
        );

        assert_eq!(
            members.methods,
            vec![
                Method::new(Visibility::Public, "void", "eat", "String food"),
                Method::new(Visibility::Private, "int", "count", ""),
                Method::new(Visibility::Public, "void", "sleep", ""),
                Method::new(
                    Visibility::Protected,
                    "String",
                    "describe",
                    "int depth, boolean short"
                ),
            ]
        );
        assert!(members.attributes.is_empty());
    }

    #[test]
    fn test_constructor() {
        let parser = MemberParser::new();

        let plain = parser.parse_line("Foo(int x)", "Foo").unwrap();
        assert_eq!(
            plain,
            Member::Method(Method::constructor(Visibility::Public, "Foo", "int x"))
        );

        // A leading type token on a constructor is dropped.
        let typed = parser.parse_line("-Foo Foo()", "Foo").unwrap();
        assert_eq!(
            typed,
            Member::Method(Method::constructor(Visibility::Private, "Foo", ""))
        );

        // Only the enclosing class name counts.
        let other = parser.parse_line("Bar(int x)", "Foo").unwrap();
        assert_eq!(
            other,
            Member::Method(Method::new(Visibility::Public, "void", "Bar", "int x"))
        );
    }

    #[test]
    fn test_method_beats_attribute() {
        let parser = MemberParser::new();
        assert!(matches!(
            parser.parse_line("int size()", "List"),
            Some(Member::Method(_))
        ));
        assert!(matches!(
            parser.parse_line("int size", "List"),
            Some(Member::Attribute(_))
        ));
    }

    #[test]
    fn test_unrecognized_lines_are_dropped() {
        let parser = MemberParser::new();
        let body = "\n// a comment\n+int\nint a b\nfoo (x)\n+name: String\n\n";
        let members = parser.parse_body(body, "Thing");

        assert!(members.attributes.is_empty());
        assert!(members.methods.is_empty());
    }

    #[test]
    fn test_parameters_keep_visibility_symbols() {
        let parser = MemberParser::new();
        let members = parser.parse_body("+void move(int dx, int -dy) +int x", "Point");

        assert_eq!(
            members.methods,
            vec![Method::new(Visibility::Public, "void", "move", "int dx, int -dy")]
        );
        assert_eq!(members.attributes, vec![attr(Visibility::Public, "int", "x")]);
    }

    #[test]
    fn test_split_segments() {
        assert_eq!(split_segments("+a b -c d"), vec!["+a b", "-c d"]);
        assert_eq!(split_segments("a-b"), vec!["a-b"]);
        assert_eq!(split_segments("f(x, -y) #z w"), vec!["f(x, -y)", "#z w"]);
    }
}
