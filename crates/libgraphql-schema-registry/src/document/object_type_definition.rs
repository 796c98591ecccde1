use crate::ast;
use crate::document::DirectiveAnnotation;
use crate::document::FieldDefinition;
use crate::document::sdl;

/// An [object type](https://spec.graphql.org/October2021/#sec-Objects)
/// definition.
///
/// The root operation types (`Query`, `Mutation`, `Subscription`) are
/// ordinary [`ObjectTypeDefinition`]s as far as the document is concerned.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectTypeDefinition {
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: Vec<FieldDefinition>,
    pub(crate) implements_interfaces: Vec<String>,
    pub(crate) name: String,
}
impl ObjectTypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            directives: vec![],
            fields: vec![],
            implements_interfaces: vec![],
            name: name.into(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    /// Look up a field on this type by name.
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

    /// Adds `field` to this type, replacing any existing field of the same
    /// name in place.
    pub fn upsert_field(&mut self, field: FieldDefinition) {
        upsert_field(&mut self.fields, field)
    }

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.upsert_field(field);
        self
    }

    pub(crate) fn from_ast(def: ast::schema::ObjectType) -> Self {
        Self {
            description: def.description,
            directives: DirectiveAnnotation::from_ast(def.directives),
            fields: def.fields.into_iter().map(FieldDefinition::from_ast).collect(),
            implements_interfaces: def.implements_interfaces,
            name: def.name,
        }
    }
}
impl std::fmt::Display for ObjectTypeDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        sdl::write_description(f, self.description(), "")?;
        write!(f, "type {}", self.name)?;
        sdl::write_implements(f, &self.implements_interfaces)?;
        sdl::write_directives(f, &self.directives)?;
        sdl::write_fields_block(f, &self.fields)
    }
}

/// Merges `field` into `fields` by name: a same-named field is replaced
/// where it stands, otherwise `field` is appended.
pub(crate) fn upsert_field(
    fields: &mut Vec<FieldDefinition>,
    field: FieldDefinition,
) {
    match fields.iter_mut().find(|existing| existing.name == field.name) {
        Some(existing) => *existing = field,
        None => fields.push(field),
    }
}
