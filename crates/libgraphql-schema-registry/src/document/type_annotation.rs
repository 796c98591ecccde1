use crate::ast;

/// The type annotated on a [`FieldDefinition`](crate::document::FieldDefinition)
/// or an [`InputValueDefinition`](crate::document::InputValueDefinition).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(Box<TypeAnnotation>),
    Named(String),
    NonNull(Box<TypeAnnotation>),
}
impl TypeAnnotation {
    /// Shorthand for a nullable [`TypeAnnotation::Named`].
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// The name of the innermost named type, with all list and non-null
    /// wrappers stripped away.
    pub fn inner_type_name(&self) -> &str {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.inner_type_name(),
            Self::Named(name) => name.as_str(),
        }
    }

    pub fn is_nullable(&self) -> bool {
        !matches!(self, Self::NonNull(_))
    }

    pub(crate) fn from_ast(ast_type: ast::schema::Type) -> Self {
        match ast_type {
            ast::schema::Type::ListType(inner) =>
                Self::List(Box::new(Self::from_ast(*inner))),

            ast::schema::Type::NamedType(name) =>
                Self::Named(name),

            ast::schema::Type::NonNullType(inner) =>
                Self::NonNull(Box::new(Self::from_ast(*inner))),
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::Named(name) => write!(f, "{name}"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
