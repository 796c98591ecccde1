//! The per-kind bodies of a [`TypeExtensionNode`](crate::document::TypeExtensionNode).
//!
//! See
//! [Type Extensions](https://spec.graphql.org/October2021/#sec-Type-Extensions)
//! in the GraphQL spec.

use crate::ast;
use crate::document::DirectiveAnnotation;
use crate::document::EnumValueDefinition;
use crate::document::FieldDefinition;
use crate::document::InputValueDefinition;
use crate::document::sdl;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumTypeExtension {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) values: Vec<EnumValueDefinition>,
}
impl EnumTypeExtension {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn values(&self) -> &[EnumValueDefinition] {
        &self.values
    }

    pub(crate) fn from_ast(def: ast::schema::EnumTypeExtension) -> Self {
        Self {
            directives: DirectiveAnnotation::from_ast(def.directives),
            name: def.name,
            values: def.values.into_iter().map(EnumValueDefinition::from_ast).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectTypeExtension {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: Vec<InputValueDefinition>,
    pub(crate) name: String,
}
impl InputObjectTypeExtension {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn fields(&self) -> &[InputValueDefinition] {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(def: ast::schema::InputObjectTypeExtension) -> Self {
        Self {
            directives: DirectiveAnnotation::from_ast(def.directives),
            fields: def.fields.into_iter().map(InputValueDefinition::from_ast).collect(),
            name: def.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceTypeExtension {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: Vec<FieldDefinition>,
    pub(crate) implements_interfaces: Vec<String>,
    pub(crate) name: String,
}
impl InterfaceTypeExtension {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
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

    pub(crate) fn from_ast(def: ast::schema::InterfaceTypeExtension) -> Self {
        Self {
            directives: DirectiveAnnotation::from_ast(def.directives),
            fields: def.fields.into_iter().map(FieldDefinition::from_ast).collect(),
            implements_interfaces: def.implements_interfaces,
            name: def.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectTypeExtension {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: Vec<FieldDefinition>,
    pub(crate) implements_interfaces: Vec<String>,
    pub(crate) name: String,
}
impl ObjectTypeExtension {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            directives: vec![],
            fields: vec![],
            implements_interfaces: vec![],
            name: name.into(),
        }
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
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

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    pub(crate) fn from_ast(def: ast::schema::ObjectTypeExtension) -> Self {
        Self {
            directives: DirectiveAnnotation::from_ast(def.directives),
            fields: def.fields.into_iter().map(FieldDefinition::from_ast).collect(),
            implements_interfaces: def.implements_interfaces,
            name: def.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarTypeExtension {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
}
impl ScalarTypeExtension {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(def: ast::schema::ScalarTypeExtension) -> Self {
        Self {
            directives: DirectiveAnnotation::from_ast(def.directives),
            name: def.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionTypeExtension {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) member_types: Vec<String>,
    pub(crate) name: String,
}
impl UnionTypeExtension {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn member_types(&self) -> &[String] {
        &self.member_types
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(def: ast::schema::UnionTypeExtension) -> Self {
        Self {
            directives: DirectiveAnnotation::from_ast(def.directives),
            member_types: def.types,
            name: def.name,
        }
    }
}

impl std::fmt::Display for EnumTypeExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "extend enum {}", self.name)?;
        sdl::write_directives(f, &self.directives)?;
        if !self.values.is_empty() {
            writeln!(f, " {{")?;
            for value in &self.values {
                sdl::write_description(f, value.description(), sdl::INDENT)?;
                writeln!(f, "{}{value}", sdl::INDENT)?;
            }
            write!(f, "}}")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for InputObjectTypeExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "extend input {}", self.name)?;
        sdl::write_directives(f, &self.directives)?;
        sdl::write_input_fields_block(f, &self.fields)
    }
}

impl std::fmt::Display for InterfaceTypeExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "extend interface {}", self.name)?;
        sdl::write_implements(f, &self.implements_interfaces)?;
        sdl::write_directives(f, &self.directives)?;
        sdl::write_fields_block(f, &self.fields)
    }
}

impl std::fmt::Display for ObjectTypeExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "extend type {}", self.name)?;
        sdl::write_implements(f, &self.implements_interfaces)?;
        sdl::write_directives(f, &self.directives)?;
        sdl::write_fields_block(f, &self.fields)
    }
}

impl std::fmt::Display for ScalarTypeExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "extend scalar {}", self.name)?;
        sdl::write_directives(f, &self.directives)
    }
}

impl std::fmt::Display for UnionTypeExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "extend union {}", self.name)?;
        sdl::write_directives(f, &self.directives)?;
        if !self.member_types.is_empty() {
            write!(f, " = {}", self.member_types.join(" | "))?;
        }
        Ok(())
    }
}
