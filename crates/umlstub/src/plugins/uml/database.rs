//! Descriptor model and database
//!
//! Stores the class and enum descriptors produced by the parser, in document
//! order, ready for rendering.

use anyhow::Result;
use serde::Serialize;

use crate::core::Database;

/// Visibility modifier for class members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,    // +
    Private,   // -
    Protected, // #
    /// No symbol given. The member parser never produces this; it exists so
    /// hand-built descriptors can leave visibility open.
    Unspecified,
}

impl Visibility {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Visibility::Public),
            '-' => Some(Visibility::Private),
            '#' => Some(Visibility::Protected),
            _ => None,
        }
    }

    /// Resolve an optional DSL symbol, defaulting to public
    pub fn from_symbol(symbol: Option<char>) -> Self {
        symbol
            .and_then(Self::from_char)
            .unwrap_or(Visibility::Public)
    }

    pub fn to_char(self) -> Option<char> {
        match self {
            Visibility::Public => Some('+'),
            Visibility::Private => Some('-'),
            Visibility::Protected => Some('#'),
            Visibility::Unspecified => None,
        }
    }

    /// Java access keyword. Unspecified falls back to `private`.
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
            Visibility::Unspecified => "private",
        }
    }
}

/// A field declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub visibility: Visibility,
    pub type_name: String,
    pub name: String,
}

impl Attribute {
    pub fn new(
        visibility: Visibility,
        type_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            visibility,
            type_name: type_name.into(),
            name: name.into(),
        }
    }
}

/// A method declaration
///
/// Constructors carry an empty `return_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    pub visibility: Visibility,
    pub return_type: String,
    pub name: String,
    pub parameters: String,
}

impl Method {
    pub fn new(
        visibility: Visibility,
        return_type: impl Into<String>,
        name: impl Into<String>,
        parameters: impl Into<String>,
    ) -> Self {
        Self {
            visibility,
            return_type: return_type.into(),
            name: name.into(),
            parameters: parameters.into(),
        }
    }

    pub fn constructor(
        visibility: Visibility,
        name: impl Into<String>,
        parameters: impl Into<String>,
    ) -> Self {
        Self::new(visibility, "", name, parameters)
    }

    pub fn is_constructor(&self) -> bool {
        self.return_type.is_empty()
    }
}

/// A class in the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDescriptor {
    pub name: String,
    pub is_abstract: bool,
    pub parent: Option<String>,
    pub attributes: Vec<Attribute>,
    pub methods: Vec<Method>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_abstract: false,
            parent: None,
            attributes: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }
}

/// An enum in the model; the body is kept as written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDescriptor {
    pub name: String,
    pub raw_values: String,
}

impl EnumDescriptor {
    pub fn new(name: impl Into<String>, raw_values: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_values: raw_values.into(),
        }
    }
}

/// One rendered unit of output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Declaration<'a> {
    Class(&'a ClassDescriptor),
    Enum(&'a EnumDescriptor),
}

impl Declaration<'_> {
    pub fn name(&self) -> &str {
        match self {
            Declaration::Class(class) => &class.name,
            Declaration::Enum(item) => &item.name,
        }
    }
}

/// Model database
///
/// Classes and enums are stored separately, each in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModelDatabase {
    classes: Vec<ClassDescriptor>,
    enums: Vec<EnumDescriptor>,
}

impl ModelDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(&self) -> &[ClassDescriptor] {
        &self.classes
    }

    pub fn enums(&self) -> &[EnumDescriptor] {
        &self.enums
    }

    /// Every declaration in output order: classes first, then enums
    pub fn declarations(&self) -> impl Iterator<Item = Declaration<'_>> {
        self.classes
            .iter()
            .map(Declaration::Class)
            .chain(self.enums.iter().map(Declaration::Enum))
    }
}

impl Database for ModelDatabase {
    type Class = ClassDescriptor;
    type Enum = EnumDescriptor;

    fn add_class(&mut self, class: Self::Class) -> Result<()> {
        self.classes.push(class);
        Ok(())
    }

    fn add_enum(&mut self, item: Self::Enum) -> Result<()> {
        self.enums.push(item);
        Ok(())
    }

    fn get_class(&self, name: &str) -> Option<&Self::Class> {
        self.classes.iter().find(|c| c.name == name)
    }

    fn get_enum(&self, name: &str) -> Option<&Self::Enum> {
        self.enums.iter().find(|e| e.name == name)
    }

    fn clear(&mut self) {
        self.classes.clear();
        self.enums.clear();
    }

    fn class_count(&self) -> usize {
        self.classes.len()
    }

    fn enum_count(&self) -> usize {
        self.enums.len()
    }
}
