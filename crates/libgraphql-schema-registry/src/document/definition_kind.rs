/// The kind of a [`DefinitionNode`](crate::document::DefinitionNode),
/// without the definition itself.
///
/// Useful for filtering a [`Document`](crate::document::Document)'s
/// definitions down to one category.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DefinitionKind {
    Directive,
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl DefinitionKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Directive => "Directive",
            Self::Enum => "Enum",
            Self::InputObject => "InputObject",
            Self::Interface => "Interface",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::Union => "Union",
        }
    }

    /// Everything except [`DefinitionKind::Directive`] defines a named type.
    pub fn is_type(&self) -> bool {
        !matches!(self, Self::Directive)
    }
}
