//! Java declaration renderer
//!
//! Renders class and enum descriptors as Java source stubs: fields, empty
//! method bodies and enum constant lists.

use anyhow::Result;
use tracing::{debug, span, Level};

use super::database::{
    Attribute, ClassDescriptor, Declaration, EnumDescriptor, Method, ModelDatabase,
};
use crate::core::{RenderConfig, Renderer};

/// Renders a [`ModelDatabase`] as one Java declaration per class or enum
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaRenderer {
    config: RenderConfig,
}

impl JavaRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a single class.
    ///
    /// Attributes come first, then methods. The two sections are separated
    /// by a blank line only when both are present.
    pub fn render_class(&self, class: &ClassDescriptor) -> String {
        let indent = self.config.indent_str();

        let mut header = String::from("public ");
        if class.is_abstract {
            header.push_str("abstract ");
        }
        header.push_str("class ");
        header.push_str(&class.name);
        if let Some(parent) = &class.parent {
            header.push_str(" extends ");
            header.push_str(parent);
        }
        header.push_str(" {");

        let mut lines = vec![header];
        lines.extend(
            class
                .attributes
                .iter()
                .map(|attribute| format!("{}{}", indent, Self::attribute_line(attribute))),
        );
        if !class.attributes.is_empty() && !class.methods.is_empty() {
            lines.push(String::new());
        }
        lines.extend(
            class
                .methods
                .iter()
                .map(|method| format!("{}{}", indent, Self::method_line(method))),
        );
        lines.push("}".to_string());

        lines.join("\n")
    }

    /// Render a single enum. The constant list is copied as written, minus
    /// the whitespace around it.
    pub fn render_enum(&self, item: &EnumDescriptor) -> String {
        let values = item.raw_values.trim();
        if values.is_empty() {
            return format!("public enum {} {{\n}}", item.name);
        }
        format!(
            "public enum {} {{\n{}{}\n}}",
            item.name,
            self.config.indent_str(),
            values
        )
    }

    /// Render one declaration of either kind
    pub fn render_declaration(&self, declaration: Declaration<'_>) -> String {
        match declaration {
            Declaration::Class(class) => self.render_class(class),
            Declaration::Enum(item) => self.render_enum(item),
        }
    }

    fn attribute_line(attribute: &Attribute) -> String {
        format!(
            "{} {} {};",
            attribute.visibility.keyword(),
            attribute.type_name,
            attribute.name
        )
    }

    fn method_line(method: &Method) -> String {
        if method.is_constructor() {
            format!(
                "{} {}({}) {{}}",
                method.visibility.keyword(),
                method.name,
                method.parameters
            )
        } else {
            format!(
                "{} {} {}({}) {{}}",
                method.visibility.keyword(),
                method.return_type,
                method.name,
                method.parameters
            )
        }
    }
}

impl Renderer<ModelDatabase> for JavaRenderer {
    type Output = Vec<String>;

    fn render(&self, database: &ModelDatabase) -> Result<Self::Output> {
        let render_span = span!(Level::INFO, "render_java", indent = self.config.indent);
        let _enter = render_span.enter();

        let output: Vec<String> = database
            .declarations()
            .map(|declaration| self.render_declaration(declaration))
            .collect();

        debug!(declarations = output.len(), "Rendering completed");
        Ok(output)
    }

    fn name(&self) -> &'static str {
        "java"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> &'static str {
        "java"
    }
}
