use crate::ast;
use crate::document::DirectiveAnnotation;
use crate::document::InputValueDefinition;
use crate::document::TypeAnnotation;
use crate::document::sdl;

/// A field defined on an object type, interface type, or their extensions.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDefinition {
    pub(crate) arguments: Vec<InputValueDefinition>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) field_type: TypeAnnotation,
    pub(crate) name: String,
}
impl FieldDefinition {
    pub fn new(name: impl Into<String>, field_type: TypeAnnotation) -> Self {
        Self {
            arguments: vec![],
            description: None,
            directives: vec![],
            field_type,
            name: name.into(),
        }
    }

    pub fn arguments(&self) -> &[InputValueDefinition] {
        &self.arguments
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn field_type(&self) -> &TypeAnnotation {
        &self.field_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn with_argument(mut self, argument: InputValueDefinition) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_directive(mut self, directive: DirectiveAnnotation) -> Self {
        self.directives.push(directive);
        self
    }

    pub(crate) fn from_ast(def: ast::schema::Field) -> Self {
        Self {
            arguments: def.arguments
                .into_iter()
                .map(InputValueDefinition::from_ast)
                .collect(),
            description: def.description,
            directives: DirectiveAnnotation::from_ast(def.directives),
            field_type: TypeAnnotation::from_ast(def.field_type),
            name: def.name,
        }
    }
}
impl std::fmt::Display for FieldDefinition {
    /// Prints the field's signature (without its description, which
    /// enclosing definitions print on the preceding line).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        sdl::write_arguments(f, &self.arguments)?;
        write!(f, ": {}", self.field_type)?;
        sdl::write_directives(f, &self.directives)
    }
}
