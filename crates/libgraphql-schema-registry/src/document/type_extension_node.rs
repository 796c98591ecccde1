use crate::ast;
use crate::document::DefinitionKind;
use crate::document::DefinitionNode;
use crate::document::DirectiveAnnotation;
use crate::document::EnumTypeExtension;
use crate::document::InputObjectTypeExtension;
use crate::document::InterfaceTypeExtension;
use crate::document::ObjectTypeExtension;
use crate::document::ScalarTypeExtension;
use crate::document::UnionTypeExtension;
use crate::document::object_type_definition::upsert_field;

/// Separator placed between the parts of a
/// [`TypeExtensionNode::unique_key()`].
pub const TYPE_EXTENSION_KEY_DELIMITER: &str = ":";

/// An `extend ...` block that adds to some type defined elsewhere.
///
/// Several extensions may target the same type, so a
/// [`Document`](crate::document::Document) indexes extensions by
/// [`unique_key()`](TypeExtensionNode::unique_key) rather than by name.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeExtensionNode {
    Enum(EnumTypeExtension),
    InputObject(InputObjectTypeExtension),
    Interface(InterfaceTypeExtension),
    Object(ObjectTypeExtension),
    Scalar(ScalarTypeExtension),
    Union(UnionTypeExtension),
}
impl TypeExtensionNode {
    pub fn as_object(&self) -> Option<&ObjectTypeExtension> {
        if let Self::Object(ext) = self {
            Some(ext)
        } else {
            None
        }
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        match self {
            Self::Enum(ext) => ext.directives(),
            Self::InputObject(ext) => ext.directives(),
            Self::Interface(ext) => ext.directives(),
            Self::Object(ext) => ext.directives(),
            Self::Scalar(ext) => ext.directives(),
            Self::Union(ext) => ext.directives(),
        }
    }

    /// The kind of type this extension may be applied to.
    pub fn extended_kind(&self) -> DefinitionKind {
        match self {
            Self::Enum(_) => DefinitionKind::Enum,
            Self::InputObject(_) => DefinitionKind::InputObject,
            Self::Interface(_) => DefinitionKind::Interface,
            Self::Object(_) => DefinitionKind::Object,
            Self::Scalar(_) => DefinitionKind::Scalar,
            Self::Union(_) => DefinitionKind::Union,
        }
    }

    /// Names of the things this extension adds to its type, in source order:
    /// fields for object, interface and input object extensions, values for
    /// enum extensions, member types for union extensions, and directive
    /// names for scalar extensions (which cannot add anything else).
    pub fn member_names(&self) -> Vec<&str> {
        match self {
            Self::Enum(ext) => ext.values.iter().map(|v| v.name()).collect(),
            Self::InputObject(ext) => ext.fields.iter().map(|f| f.name()).collect(),
            Self::Interface(ext) => ext.fields.iter().map(|f| f.name()).collect(),
            Self::Object(ext) => ext.fields.iter().map(|f| f.name()).collect(),
            Self::Scalar(ext) => ext.directives.iter().map(|d| d.name()).collect(),
            Self::Union(ext) => ext.member_types.iter().map(String::as_str).collect(),
        }
    }

    /// Name of the type being extended.
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(ext) => ext.name(),
            Self::InputObject(ext) => ext.name(),
            Self::Interface(ext) => ext.name(),
            Self::Object(ext) => ext.name(),
            Self::Scalar(ext) => ext.name(),
            Self::Union(ext) => ext.name(),
        }
    }

    /// The key this extension is indexed under within a
    /// [`Document`](crate::document::Document): the extended type's name
    /// followed by each of its [`member_names()`](Self::member_names), all
    /// joined by [`TYPE_EXTENSION_KEY_DELIMITER`].
    ///
    /// `extend type Query { a: Int b: Int }` is keyed as `"Query:a:b"`.
    ///
    /// Two extensions of the same type that add the same members in the same
    /// order produce the same key; the later one replaces the earlier one.
    pub fn unique_key(&self) -> String {
        let mut key = self.name().to_string();
        key.push_str(TYPE_EXTENSION_KEY_DELIMITER);
        key.push_str(self.member_names().join(TYPE_EXTENSION_KEY_DELIMITER).as_str());
        key
    }

    /// Folds this extension into `base`.
    ///
    /// Fields and enum values are merged by name (the extension's version
    /// wins), while interfaces, union members and directives are appended
    /// unless already present. If `base` is not the kind of type this
    /// extension applies to, `base` is left untouched and the extension is
    /// handed back.
    pub fn merge_into(self, base: &mut DefinitionNode) -> Result<(), Self> {
        match (self, base) {
            (Self::Enum(ext), DefinitionNode::Enum(def)) => {
                for value in ext.values {
                    match def.values.iter_mut().find(|v| v.name == value.name) {
                        Some(existing) => *existing = value,
                        None => def.values.push(value),
                    }
                }
                append_directives(&mut def.directives, ext.directives);
                Ok(())
            },

            (Self::InputObject(ext), DefinitionNode::InputObject(def)) => {
                for field in ext.fields {
                    match def.fields.iter_mut().find(|f| f.name == field.name) {
                        Some(existing) => *existing = field,
                        None => def.fields.push(field),
                    }
                }
                append_directives(&mut def.directives, ext.directives);
                Ok(())
            },

            (Self::Interface(ext), DefinitionNode::Interface(def)) => {
                for field in ext.fields {
                    upsert_field(&mut def.fields, field);
                }
                append_names(&mut def.implements_interfaces, ext.implements_interfaces);
                append_directives(&mut def.directives, ext.directives);
                Ok(())
            },

            (Self::Object(ext), DefinitionNode::Object(def)) => {
                for field in ext.fields {
                    upsert_field(&mut def.fields, field);
                }
                append_names(&mut def.implements_interfaces, ext.implements_interfaces);
                append_directives(&mut def.directives, ext.directives);
                Ok(())
            },

            (Self::Scalar(ext), DefinitionNode::Scalar(def)) => {
                append_directives(&mut def.directives, ext.directives);
                Ok(())
            },

            (Self::Union(ext), DefinitionNode::Union(def)) => {
                append_names(&mut def.member_types, ext.member_types);
                append_directives(&mut def.directives, ext.directives);
                Ok(())
            },

            (ext, _) => Err(ext),
        }
    }

    pub(crate) fn from_ast(ext: ast::schema::TypeExtension) -> Self {
        use ast::schema::TypeExtension;
        match ext {
            TypeExtension::Enum(ext) =>
                Self::Enum(EnumTypeExtension::from_ast(ext)),
            TypeExtension::InputObject(ext) =>
                Self::InputObject(InputObjectTypeExtension::from_ast(ext)),
            TypeExtension::Interface(ext) =>
                Self::Interface(InterfaceTypeExtension::from_ast(ext)),
            TypeExtension::Object(ext) =>
                Self::Object(ObjectTypeExtension::from_ast(ext)),
            TypeExtension::Scalar(ext) =>
                Self::Scalar(ScalarTypeExtension::from_ast(ext)),
            TypeExtension::Union(ext) =>
                Self::Union(UnionTypeExtension::from_ast(ext)),
        }
    }
}
impl std::fmt::Display for TypeExtensionNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enum(ext) => std::fmt::Display::fmt(ext, f),
            Self::InputObject(ext) => std::fmt::Display::fmt(ext, f),
            Self::Interface(ext) => std::fmt::Display::fmt(ext, f),
            Self::Object(ext) => std::fmt::Display::fmt(ext, f),
            Self::Scalar(ext) => std::fmt::Display::fmt(ext, f),
            Self::Union(ext) => std::fmt::Display::fmt(ext, f),
        }
    }
}
impl std::convert::From<ObjectTypeExtension> for TypeExtensionNode {
    fn from(ext: ObjectTypeExtension) -> Self {
        Self::Object(ext)
    }
}

fn append_directives(
    directives: &mut Vec<DirectiveAnnotation>,
    additions: Vec<DirectiveAnnotation>,
) {
    for directive in additions {
        if !directives.contains(&directive) {
            directives.push(directive);
        }
    }
}

fn append_names(names: &mut Vec<String>, additions: Vec<String>) {
    for name in additions {
        if !names.contains(&name) {
            names.push(name);
        }
    }
}
