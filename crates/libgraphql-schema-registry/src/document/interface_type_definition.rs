use crate::ast;
use crate::document::DirectiveAnnotation;
use crate::document::FieldDefinition;
use crate::document::object_type_definition::upsert_field;
use crate::document::sdl;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceTypeDefinition {
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: Vec<FieldDefinition>,
    pub(crate) implements_interfaces: Vec<String>,
    pub(crate) name: String,
}
impl InterfaceTypeDefinition {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn implements_interfaces(&self) -> &[String] {
        &self.implements_interfaces
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn upsert_field(&mut self, field: FieldDefinition) {
        upsert_field(&mut self.fields, field)
    }

    pub(crate) fn from_ast(def: ast::schema::InterfaceType) -> Self {
        Self {
            description: def.description,
            directives: DirectiveAnnotation::from_ast(def.directives),
            fields: def.fields.into_iter().map(FieldDefinition::from_ast).collect(),
            implements_interfaces: def.implements_interfaces,
            name: def.name,
        }
    }
}
impl std::fmt::Display for InterfaceTypeDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        sdl::write_description(f, self.description(), "")?;
        write!(f, "interface {}", self.name)?;
        sdl::write_implements(f, &self.implements_interfaces)?;
        sdl::write_directives(f, &self.directives)?;
        sdl::write_fields_block(f, &self.fields)
    }
}
