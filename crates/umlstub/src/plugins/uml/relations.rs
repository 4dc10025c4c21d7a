//! Relationship resolver
//!
//! Turns relationships into the attributes they imply on each class. A plain
//! link `A -- B` makes both sides navigable; an arrow only gives the source a
//! reference to the target.
//!
//! A plain link records each side's cardinality on the opposite class
//! exactly as written. An arrow has only one attribute to type, so a
//! cardinality written on its source end alone is used for it: `A "*" --> B`
//! and `A --> "*" B` both give `A` a `B[]`.

use indexmap::IndexMap;
use tracing::debug;

use super::grammar::{Cardinality, Relation};

/// An attribute to be added to a class because of a relationship
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AttributeSpec {
    /// Name of the related class
    pub type_name: String,
    /// Cardinality on the related class's end
    pub cardinality: Option<Cardinality>,
}

impl AttributeSpec {
    fn new(type_name: &str, cardinality: Option<Cardinality>) -> Self {
        Self {
            type_name: type_name.to_string(),
            cardinality,
        }
    }
}

/// Class name to synthesized attribute specs, in first-seen order
pub(crate) type RelationMap = IndexMap<String, Vec<AttributeSpec>>;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct RelationResolver;

impl RelationResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, relations: &[Relation]) -> RelationMap {
        let mut map = RelationMap::new();

        for relation in relations {
            // Both endpoints get an entry even when nothing is added to it.
            map.entry(relation.from.clone()).or_default();
            map.entry(relation.to.clone()).or_default();

            let cardinality_to = if relation.kind.is_bidirectional() {
                relation.cardinality_to
            } else {
                relation.cardinality_to.or(relation.cardinality_from)
            };

            if let Some(specs) = map.get_mut(&relation.from) {
                specs.push(AttributeSpec::new(&relation.to, cardinality_to));
            }
            if relation.kind.is_bidirectional() {
                if let Some(specs) = map.get_mut(&relation.to) {
                    specs.push(AttributeSpec::new(&relation.from, relation.cardinality_from));
                }
            }
        }

        debug!(
            relation_count = relations.len(),
            class_count = map.len(),
            "Resolved relationships"
        );
        map
    }
}
