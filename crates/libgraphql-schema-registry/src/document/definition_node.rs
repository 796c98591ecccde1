use crate::ast;
use crate::document::DefinitionKind;
use crate::document::DirectiveDefinition;
use crate::document::EnumTypeDefinition;
use crate::document::InputObjectTypeDefinition;
use crate::document::InterfaceTypeDefinition;
use crate::document::ObjectTypeDefinition;
use crate::document::ScalarTypeDefinition;
use crate::document::UnionTypeDefinition;

/// A named, non-extension definition held by a
/// [`Document`](crate::document::Document).
///
/// Within a document every [`DefinitionNode`] is indexed by its
/// [`name()`](DefinitionNode::name), so names are unique among them.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum DefinitionNode {
    Directive(DirectiveDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Object(ObjectTypeDefinition),
    Scalar(ScalarTypeDefinition),
    Union(UnionTypeDefinition),
}
impl DefinitionNode {
    pub fn as_directive(&self) -> Option<&DirectiveDefinition> {
        if let Self::Directive(def) = self {
            Some(def)
        } else {
            None
        }
    }

    pub fn as_enum(&self) -> Option<&EnumTypeDefinition> {
        if let Self::Enum(def) = self {
            Some(def)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectTypeDefinition> {
        if let Self::InputObject(def) = self {
            Some(def)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceTypeDefinition> {
        if let Self::Interface(def) = self {
            Some(def)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectTypeDefinition> {
        if let Self::Object(def) = self {
            Some(def)
        } else {
            None
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut ObjectTypeDefinition> {
        if let Self::Object(def) = self {
            Some(def)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarTypeDefinition> {
        if let Self::Scalar(def) = self {
            Some(def)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionTypeDefinition> {
        if let Self::Union(def) = self {
            Some(def)
        } else {
            None
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Directive(def) => def.description(),
            Self::Enum(def) => def.description(),
            Self::InputObject(def) => def.description(),
            Self::Interface(def) => def.description(),
            Self::Object(def) => def.description(),
            Self::Scalar(def) => def.description(),
            Self::Union(def) => def.description(),
        }
    }

    pub fn kind(&self) -> DefinitionKind {
        match self {
            Self::Directive(_) => DefinitionKind::Directive,
            Self::Enum(_) => DefinitionKind::Enum,
            Self::InputObject(_) => DefinitionKind::InputObject,
            Self::Interface(_) => DefinitionKind::Interface,
            Self::Object(_) => DefinitionKind::Object,
            Self::Scalar(_) => DefinitionKind::Scalar,
            Self::Union(_) => DefinitionKind::Union,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Directive(def) => def.name(),
            Self::Enum(def) => def.name(),
            Self::InputObject(def) => def.name(),
            Self::Interface(def) => def.name(),
            Self::Object(def) => def.name(),
            Self::Scalar(def) => def.name(),
            Self::Union(def) => def.name(),
        }
    }

    pub(crate) fn from_ast_type_def(def: ast::schema::TypeDefinition) -> Self {
        use ast::schema::TypeDefinition;
        match def {
            TypeDefinition::Enum(def) =>
                Self::Enum(EnumTypeDefinition::from_ast(def)),
            TypeDefinition::InputObject(def) =>
                Self::InputObject(InputObjectTypeDefinition::from_ast(def)),
            TypeDefinition::Interface(def) =>
                Self::Interface(InterfaceTypeDefinition::from_ast(def)),
            TypeDefinition::Object(def) =>
                Self::Object(ObjectTypeDefinition::from_ast(def)),
            TypeDefinition::Scalar(def) =>
                Self::Scalar(ScalarTypeDefinition::from_ast(def)),
            TypeDefinition::Union(def) =>
                Self::Union(UnionTypeDefinition::from_ast(def)),
        }
    }
}
impl std::fmt::Display for DefinitionNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directive(def) => std::fmt::Display::fmt(def, f),
            Self::Enum(def) => std::fmt::Display::fmt(def, f),
            Self::InputObject(def) => std::fmt::Display::fmt(def, f),
            Self::Interface(def) => std::fmt::Display::fmt(def, f),
            Self::Object(def) => std::fmt::Display::fmt(def, f),
            Self::Scalar(def) => std::fmt::Display::fmt(def, f),
            Self::Union(def) => std::fmt::Display::fmt(def, f),
        }
    }
}
impl std::convert::From<DirectiveDefinition> for DefinitionNode {
    fn from(def: DirectiveDefinition) -> Self {
        Self::Directive(def)
    }
}
impl std::convert::From<EnumTypeDefinition> for DefinitionNode {
    fn from(def: EnumTypeDefinition) -> Self {
        Self::Enum(def)
    }
}
impl std::convert::From<InputObjectTypeDefinition> for DefinitionNode {
    fn from(def: InputObjectTypeDefinition) -> Self {
        Self::InputObject(def)
    }
}
impl std::convert::From<InterfaceTypeDefinition> for DefinitionNode {
    fn from(def: InterfaceTypeDefinition) -> Self {
        Self::Interface(def)
    }
}
impl std::convert::From<ObjectTypeDefinition> for DefinitionNode {
    fn from(def: ObjectTypeDefinition) -> Self {
        Self::Object(def)
    }
}
impl std::convert::From<ScalarTypeDefinition> for DefinitionNode {
    fn from(def: ScalarTypeDefinition) -> Self {
        Self::Scalar(def)
    }
}
impl std::convert::From<UnionTypeDefinition> for DefinitionNode {
    fn from(def: UnionTypeDefinition) -> Self {
        Self::Union(def)
    }
}
