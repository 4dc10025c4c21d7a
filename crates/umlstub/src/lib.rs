//! Umlstub - Generate Java stubs from a UML-like class notation
//!
//! A library for parsing a lightweight text notation of classes, enums,
//! inheritance and associations, and rendering it as Java declarations.
//!
//! # Quick Start
//!
//! ```rust
//! use umlstub::generate;
//!
//! let output = generate("class Dog extends Animal { +String name }");
//! assert_eq!(
//!     output,
//!     vec!["public class Dog extends Animal {\n    public String name;\n}"]
//! );
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use umlstub::prelude::*;
//!
//! let input = "class Library { }\nclass Book { }\nLibrary \"1\" --> \"*\" Book";
//!
//! // Parse into a database
//! let parser = UmlParser::new();
//! let mut database = ModelDatabase::new();
//! parser.parse(input, &mut database).unwrap();
//!
//! // Access the parsed data
//! assert_eq!(database.class_count(), 2);
//! let library = database.get_class("Library").unwrap();
//! assert_eq!(library.attributes[0].type_name, "Book[]");
//!
//! // Render to Java
//! let renderer = JavaRenderer::new();
//! let declarations = renderer.render(&database).unwrap();
//! assert_eq!(declarations.len(), 2);
//! ```

pub mod core;
pub mod plugins;

pub use crate::core::*;

use tracing::warn;

use crate::plugins::uml::{JavaRenderer, ModelDatabase, UmlParser};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{Database, Detector, Parser, RenderConfig, Renderer, UmlError};
    pub use crate::plugins::orchestrator::Orchestrator;
    pub use crate::plugins::uml::{
        Attribute, ClassDescriptor, Declaration, EnumDescriptor, JavaRenderer, Method,
        ModelDatabase, UmlDetector, UmlParser, Visibility,
    };
}

/// Generate Java declarations from class notation
///
/// Returns one string per class, in document order, followed by one per
/// enum. Unrecognized text is ignored, so input without any declaration
/// yields an empty list.
///
/// # Example
/// ```rust
/// use umlstub::generate;
///
/// let output = generate("enum Color { RED, GREEN, BLUE }");
/// assert_eq!(output, vec!["public enum Color {\n    RED, GREEN, BLUE\n}"]);
/// assert!(generate("nothing to see").is_empty());
/// ```
pub fn generate(input: &str) -> Vec<String> {
    generate_with_config(input, &RenderConfig::default())
}

/// Generate Java declarations with custom render options
///
/// # Example
/// ```rust
/// use umlstub::{generate_with_config, RenderConfig};
///
/// let output = generate_with_config("class P { +int x }", &RenderConfig::new(2));
/// assert_eq!(output, vec!["public class P {\n  public int x;\n}"]);
/// ```
pub fn generate_with_config(input: &str, config: &RenderConfig) -> Vec<String> {
    let database = parse(input);
    let renderer = JavaRenderer::with_config(*config);
    database
        .declarations()
        .map(|declaration| renderer.render_declaration(declaration))
        .collect()
}

/// Parse class notation into a database without rendering
///
/// Useful when you need to inspect the model, or serialize it, before
/// rendering.
///
/// # Example
/// ```rust
/// use umlstub::parse;
/// use umlstub::prelude::Database;
///
/// let db = parse("abstract class Shape { }\nenum Kind { A, B }");
/// assert_eq!(db.class_count(), 1);
/// assert_eq!(db.enum_count(), 1);
/// assert!(db.classes()[0].is_abstract);
/// ```
pub fn parse(input: &str) -> ModelDatabase {
    let parser = UmlParser::new();
    let mut database = ModelDatabase::new();
    if let Err(err) = parser.parse(input, &mut database) {
        warn!(error = %err, "Parser reported an error, keeping partial model");
    }
    database
}
