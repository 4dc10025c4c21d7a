//! Model assembler
//!
//! Runs the grammar matcher, member parser and relationship resolver over a
//! document and merges their results into a [`ModelDatabase`].

use anyhow::Result;
use tracing::{debug, info, span, trace, Level};

use super::database::{Attribute, ClassDescriptor, EnumDescriptor, ModelDatabase, Visibility};
use super::grammar::{Cardinality, GrammarMatcher};
use super::members::MemberParser;
use super::relations::{AttributeSpec, RelationResolver};
use crate::core::{Database, Parser};

/// Parser for the class notation
///
/// Never fails on malformed input: unrecognized text contributes nothing and
/// a document without declarations leaves the database empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct UmlParser {
    grammar: GrammarMatcher,
    members: MemberParser,
    resolver: RelationResolver,
}

impl UmlParser {
    pub fn new() -> Self {
        Self {
            grammar: GrammarMatcher::new(),
            members: MemberParser::new(),
            resolver: RelationResolver::new(),
        }
    }

    /// Turn a resolved relationship into the attribute it stands for.
    /// The related class name doubles as the field name.
    fn synthesized_attribute(spec: &AttributeSpec) -> Attribute {
        let type_name = match spec.cardinality {
            Some(Cardinality::Many) => format!("{}[]", spec.type_name),
            Some(Cardinality::One) | None => spec.type_name.clone(),
        };
        Attribute::new(Visibility::Public, type_name, spec.type_name.clone())
    }
}

impl Parser<ModelDatabase> for UmlParser {
    fn parse(&self, input: &str, database: &mut ModelDatabase) -> Result<()> {
        let parse_span = span!(Level::INFO, "parse_uml", input_len = input.len());
        let _enter = parse_span.enter();

        trace!("Starting model assembly");

        let abstract_classes = self.grammar.abstract_classes(input);
        let relation_map = self.resolver.resolve(&self.grammar.relations(input));

        let classes_span = span!(Level::DEBUG, "assemble_classes");
        let _classes_enter = classes_span.enter();
        for header in self.grammar.classes(input) {
            let members = self.members.parse_body(header.body, header.name);

            let mut class = ClassDescriptor::new(header.name)
                .with_abstract(abstract_classes.contains(header.name));
            if let Some(parent) = header.parent {
                class = class.with_parent(parent);
            }
            class.attributes = members.attributes;
            class.methods = members.methods;

            if let Some(specs) = relation_map.get(header.name) {
                for spec in specs {
                    class.add_attribute(Self::synthesized_attribute(spec));
                }
            }

            debug!(
                class = %class.name,
                attributes = class.attributes.len(),
                methods = class.methods.len(),
                is_abstract = class.is_abstract,
                "Assembled class"
            );
            database.add_class(class)?;
        }
        drop(_classes_enter);

        for header in self.grammar.enums(input) {
            database.add_enum(EnumDescriptor::new(header.name, header.body))?;
        }

        info!(
            classes = database.class_count(),
            enums = database.enum_count(),
            "Parsing completed"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "uml"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn can_parse(&self, input: &str) -> bool {
        input.contains("class") || input.contains("enum")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> ModelDatabase {
        let parser = UmlParser::new();
        let mut db = ModelDatabase::new();
        parser.parse(input, &mut db).unwrap();
        db
    }

    #[test]
    fn test_parser_metadata() {
        let parser = UmlParser::new();
        assert_eq!(parser.name(), "uml");
        assert_eq!(parser.version(), "0.1.0");
        assert!(parser.can_parse("class A { }"));
        assert!(!parser.can_parse("graph TD; A-->B"));
    }

    #[test]
    fn test_parse_empty_class() {
        let db = parse("class X { }");

        assert_eq!(db.class_count(), 1);
        let class = &db.classes()[0];
        assert_eq!(class.name, "X");
        assert!(class.attributes.is_empty());
        assert!(class.methods.is_empty());
    }

    #[test]
    fn test_parse_inline_attributes() {
        let db = parse("class Animal { +int age -String name }");

        assert_eq!(
            db.classes()[0].attributes,
            vec![
                Attribute::new(Visibility::Public, "int", "age"),
                Attribute::new(Visibility::Private, "String", "name"),
            ]
        );
    }

    #[test]
    fn test_abstract_marker_position_does_not_matter() {
        let before = parse("abstract class Shape\nclass Shape { }");
        let inline = parse("abstract class Shape { }");
        let after = parse("class Shape { }\nabstract class Shape");

        assert!(before.classes()[0].is_abstract);
        assert!(inline.classes()[0].is_abstract);
        assert!(after.classes()[0].is_abstract);
        assert!(!parse("class Shape { }").classes()[0].is_abstract);
    }

    #[test]
    fn test_parent_is_not_validated() {
        let db = parse("class Dog extends Missing { }");
        assert_eq!(db.classes()[0].parent.as_deref(), Some("Missing"));
    }

    #[test]
    fn test_plain_relation_adds_both_sides() {
        let db = parse("class A { }\nclass B { }\nA -- B");

        assert_eq!(
            db.get_class("A").unwrap().attributes,
            vec![Attribute::new(Visibility::Public, "B", "B")]
        );
        assert_eq!(
            db.get_class("B").unwrap().attributes,
            vec![Attribute::new(Visibility::Public, "A", "A")]
        );
    }

    #[test]
    fn test_many_cardinality_is_array_typed() {
        let db = parse("class A { }\nclass B { }\nA \"*\" --> B");

        assert_eq!(
            db.get_class("A").unwrap().attributes,
            vec![Attribute::new(Visibility::Public, "B[]", "B")]
        );
        assert!(db.get_class("B").unwrap().attributes.is_empty());

        let db = parse("class A { }\nclass B { }\nA --> \"*\" B");
        assert_eq!(
            db.get_class("A").unwrap().attributes,
            vec![Attribute::new(Visibility::Public, "B[]", "B")]
        );

        let db = parse("class A { }\nclass B { }\nA \"*\" --> \"1\" B");
        assert_eq!(
            db.get_class("A").unwrap().attributes,
            vec![Attribute::new(Visibility::Public, "B", "B")]
        );
    }

    #[test]
    fn test_reverse_arrow() {
        let db = parse("class A { }\nclass B { }\nA <-- B");

        assert!(db.get_class("A").unwrap().attributes.is_empty());
        assert_eq!(
            db.get_class("B").unwrap().attributes,
            vec![Attribute::new(Visibility::Public, "A", "A")]
        );
    }

    #[test]
    fn test_body_attributes_come_before_synthesized_ones() {
        let db = parse("class Order {\n  -int id\n}\nclass Item { }\nOrder -- \"*\" Item");

        assert_eq!(
            db.get_class("Order").unwrap().attributes,
            vec![
                Attribute::new(Visibility::Private, "int", "id"),
                Attribute::new(Visibility::Public, "Item[]", "Item"),
            ]
        );
    }

    #[test]
    fn test_plain_relation_types_each_side_by_its_far_cardinality() {
        let db = parse("class Order { }\nclass Item { }\nOrder -- \"*\" Item");

        assert_eq!(
            db.get_class("Order").unwrap().attributes,
            vec![Attribute::new(Visibility::Public, "Item[]", "Item")]
        );
        assert_eq!(
            db.get_class("Item").unwrap().attributes,
            vec![Attribute::new(Visibility::Public, "Order", "Order")]
        );
    }

    #[test]
    fn test_relation_to_undeclared_class_is_harmless() {
        let db = parse("class A { }\nA --> Ghost");

        assert_eq!(db.class_count(), 1);
        assert_eq!(db.classes()[0].attributes[0].type_name, "Ghost");
    }

    #[test]
    fn test_enums_follow_classes() {
        let db = parse("enum Color { RED }\nclass A { }\nenum Size { S, M }");

        let names: Vec<_> = db.declarations().map(|d| d.name().to_string()).collect();
        assert_eq!(names, vec!["A", "Color", "Size"]);
        assert_eq!(db.get_enum("Size").unwrap().raw_values, " S, M ");
    }

    #[test]
    fn test_no_declarations() {
        let db = parse("just some words -- nothing else");
        assert!(db.is_empty());
    }
}
