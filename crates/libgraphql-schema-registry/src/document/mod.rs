mod definition_kind;
mod definition_node;
mod directive_annotation;
mod directive_definition;
#[allow(clippy::module_inception)]
mod document;
mod document_error;
mod enum_type_definition;
mod enum_value_definition;
mod field_definition;
mod input_object_type_definition;
mod input_value_definition;
mod interface_type_definition;
mod object_type_definition;
pub mod partial_parser;
mod scalar_type_definition;
mod schema_definition;
mod sdl;
mod type_annotation;
mod type_extension_node;
mod type_extensions;
mod union_type_definition;
mod value;

pub use definition_kind::DefinitionKind;
pub use definition_node::DefinitionNode;
pub use directive_annotation::DirectiveAnnotation;
pub use directive_definition::DirectiveDefinition;
pub use document::Document;
pub use document::DocumentNode;
pub use document_error::DocumentError;
pub use enum_type_definition::EnumTypeDefinition;
pub use enum_value_definition::EnumValueDefinition;
pub use field_definition::FieldDefinition;
pub use input_object_type_definition::InputObjectTypeDefinition;
pub use input_value_definition::InputValueDefinition;
pub use interface_type_definition::InterfaceTypeDefinition;
pub use object_type_definition::ObjectTypeDefinition;
pub use scalar_type_definition::ScalarTypeDefinition;
pub use schema_definition::SchemaDefinition;
pub use type_annotation::TypeAnnotation;
pub use type_extension_node::TYPE_EXTENSION_KEY_DELIMITER;
pub use type_extension_node::TypeExtensionNode;
pub use type_extensions::EnumTypeExtension;
pub use type_extensions::InputObjectTypeExtension;
pub use type_extensions::InterfaceTypeExtension;
pub use type_extensions::ObjectTypeExtension;
pub use type_extensions::ScalarTypeExtension;
pub use type_extensions::UnionTypeExtension;
pub use union_type_definition::UnionTypeDefinition;
pub use value::Value;

#[cfg(test)]
mod tests;
