use crate::ast;
use crate::document::DirectiveAnnotation;
use crate::document::TypeAnnotation;
use crate::document::Value;
use crate::document::sdl;
use crate::document::value::write_quoted_string;

/// An argument of a field or directive, or a field of an input object type.
///
/// See
/// [Input Values](https://spec.graphql.org/October2021/#InputValueDefinition)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputValueDefinition {
    pub(crate) default_value: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) value_type: TypeAnnotation,
}
impl InputValueDefinition {
    pub fn new(name: impl Into<String>, value_type: TypeAnnotation) -> Self {
        Self {
            default_value: None,
            description: None,
            directives: vec![],
            name: name.into(),
            value_type,
        }
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value_type(&self) -> &TypeAnnotation {
        &self.value_type
    }

    pub fn with_default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub(crate) fn from_ast(def: ast::schema::InputValue) -> Self {
        Self {
            default_value: def.default_value.map(Value::from_ast),
            description: def.description,
            directives: DirectiveAnnotation::from_ast(def.directives),
            name: def.name,
            value_type: TypeAnnotation::from_ast(def.value_type),
        }
    }
}
impl std::fmt::Display for InputValueDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Input values are printed inline, so descriptions use the
        // single-line string form.
        if let Some(description) = &self.description {
            write_quoted_string(f, description)?;
            write!(f, " ")?;
        }
        write!(f, "{}: {}", self.name, self.value_type)?;
        if let Some(default_value) = &self.default_value {
            write!(f, " = {default_value}")?;
        }
        sdl::write_directives(f, &self.directives)
    }
}
