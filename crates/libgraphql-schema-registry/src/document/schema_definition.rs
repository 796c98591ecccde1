use crate::ast;
use crate::document::DirectiveAnnotation;
use crate::document::sdl;

/// A `schema { ... }` block naming the root operation types.
///
/// When a document has no such block the default root type names apply
/// (see [`SchemaDefinition::query_type_name()`] and friends).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaDefinition {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) mutation: Option<String>,
    pub(crate) query: Option<String>,
    pub(crate) subscription: Option<String>,
}
impl SchemaDefinition {
    pub const DEFAULT_MUTATION_TYPE_NAME: &'static str = "Mutation";
    pub const DEFAULT_QUERY_TYPE_NAME: &'static str = "Query";
    pub const DEFAULT_SUBSCRIPTION_TYPE_NAME: &'static str = "Subscription";

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn mutation_type_name(&self) -> &str {
        self.mutation.as_deref().unwrap_or(Self::DEFAULT_MUTATION_TYPE_NAME)
    }

    pub fn query_type_name(&self) -> &str {
        self.query.as_deref().unwrap_or(Self::DEFAULT_QUERY_TYPE_NAME)
    }

    pub fn subscription_type_name(&self) -> &str {
        self.subscription.as_deref().unwrap_or(Self::DEFAULT_SUBSCRIPTION_TYPE_NAME)
    }

    pub(crate) fn from_ast(def: ast::schema::SchemaDefinition) -> Self {
        Self {
            directives: DirectiveAnnotation::from_ast(def.directives),
            mutation: def.mutation,
            query: def.query,
            subscription: def.subscription,
        }
    }
}
impl std::fmt::Display for SchemaDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "schema")?;
        sdl::write_directives(f, &self.directives)?;
        writeln!(f, " {{")?;
        let root_types = [
            ("query", &self.query),
            ("mutation", &self.mutation),
            ("subscription", &self.subscription),
        ];
        for (operation, type_name) in root_types {
            if let Some(type_name) = type_name {
                writeln!(f, "{}{operation}: {type_name}", sdl::INDENT)?;
            }
        }
        write!(f, "}}")
    }
}
