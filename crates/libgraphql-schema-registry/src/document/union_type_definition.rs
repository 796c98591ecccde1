use crate::ast;
use crate::document::DirectiveAnnotation;
use crate::document::sdl;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionTypeDefinition {
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) member_types: Vec<String>,
    pub(crate) name: String,
}
impl UnionTypeDefinition {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    /// Names of the object types that are members of this union, in the
    /// order they were declared.
    pub fn member_types(&self) -> &[String] {
        &self.member_types
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(def: ast::schema::UnionType) -> Self {
        Self {
            description: def.description,
            directives: DirectiveAnnotation::from_ast(def.directives),
            member_types: def.types,
            name: def.name,
        }
    }
}
impl std::fmt::Display for UnionTypeDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        sdl::write_description(f, self.description(), "")?;
        write!(f, "union {}", self.name)?;
        sdl::write_directives(f, &self.directives)?;
        if !self.member_types.is_empty() {
            write!(f, " = {}", self.member_types.join(" | "))?;
        }
        Ok(())
    }
}
