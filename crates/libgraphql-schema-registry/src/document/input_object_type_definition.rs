use crate::ast;
use crate::document::DirectiveAnnotation;
use crate::document::InputValueDefinition;
use crate::document::sdl;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectTypeDefinition {
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: Vec<InputValueDefinition>,
    pub(crate) name: String,
}
impl InputObjectTypeDefinition {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn fields(&self) -> &[InputValueDefinition] {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(def: ast::schema::InputObjectType) -> Self {
        Self {
            description: def.description,
            directives: DirectiveAnnotation::from_ast(def.directives),
            fields: def.fields.into_iter().map(InputValueDefinition::from_ast).collect(),
            name: def.name,
        }
    }
}
impl std::fmt::Display for InputObjectTypeDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        sdl::write_description(f, self.description(), "")?;
        write!(f, "input {}", self.name)?;
        sdl::write_directives(f, &self.directives)?;
        sdl::write_input_fields_block(f, &self.fields)
    }
}
