use crate::ast;
use crate::document::InputValueDefinition;
use crate::document::sdl;

/// A [directive definition](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
/// (`directive @name(...) on LOCATION | ...`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveDefinition {
    pub(crate) arguments: Vec<InputValueDefinition>,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<String>,
    pub(crate) name: String,
    pub(crate) repeatable: bool,
}
impl DirectiveDefinition {
    pub fn arguments(&self) -> &[InputValueDefinition] {
        &self.arguments
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The directive locations (e.g. `FIELD_DEFINITION`) this directive may
    /// be applied to.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub(crate) fn from_ast(def: ast::schema::DirectiveDefinition) -> Self {
        Self {
            arguments: def.arguments
                .into_iter()
                .map(InputValueDefinition::from_ast)
                .collect(),
            description: def.description,
            locations: def.locations
                .iter()
                .map(|location| location.as_str().to_string())
                .collect(),
            name: def.name,
            repeatable: def.repeatable,
        }
    }
}
impl std::fmt::Display for DirectiveDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        sdl::write_description(f, self.description(), "")?;
        write!(f, "directive @{}", self.name)?;
        sdl::write_arguments(f, &self.arguments)?;
        if self.repeatable {
            write!(f, " repeatable")?;
        }
        write!(f, " on {}", self.locations.join(" | "))
    }
}
