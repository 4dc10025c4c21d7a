//! Class notation plugin
//!
//! Parses the class notation into descriptors and renders them as Java.

mod database;
mod detector;
mod grammar;
mod members;
mod parser;
mod relations;
mod renderer;

pub use database::{
    Attribute, ClassDescriptor, Declaration, EnumDescriptor, Method, ModelDatabase, Visibility,
};
pub use detector::UmlDetector;
pub use parser::UmlParser;
pub use renderer::JavaRenderer;
