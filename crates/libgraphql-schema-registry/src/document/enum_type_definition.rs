use crate::ast;
use crate::document::DirectiveAnnotation;
use crate::document::EnumValueDefinition;
use crate::document::sdl;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumTypeDefinition {
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) values: Vec<EnumValueDefinition>,
}
impl EnumTypeDefinition {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn values(&self) -> &[EnumValueDefinition] {
        &self.values
    }

    pub(crate) fn from_ast(def: ast::schema::EnumType) -> Self {
        Self {
            description: def.description,
            directives: DirectiveAnnotation::from_ast(def.directives),
            name: def.name,
            values: def.values.into_iter().map(EnumValueDefinition::from_ast).collect(),
        }
    }
}
impl std::fmt::Display for EnumTypeDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        sdl::write_description(f, self.description(), "")?;
        write!(f, "enum {}", self.name)?;
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
