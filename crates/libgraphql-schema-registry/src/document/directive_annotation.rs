use crate::ast;
use crate::document::Value;
use indexmap::IndexMap;

/// A [directive annotation](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// applied to some definition, field, argument or enum value.
///
/// Only the directive's name and its literal arguments are recorded here;
/// what the directive means is up to whoever consumes the document.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) name: String,
}
impl DirectiveAnnotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            arguments: IndexMap::new(),
            name: name.into(),
        }
    }

    /// A map from ArgumentName -> [`Value`] in the order the arguments were
    /// written.
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn with_argument(
        mut self,
        name: impl Into<String>,
        value: Value,
    ) -> Self {
        self.arguments.insert(name.into(), value);
        self
    }

    pub(crate) fn from_ast(ast_annots: Vec<ast::schema::Directive>) -> Vec<Self> {
        ast_annots.into_iter().map(|ast_annot| Self {
            arguments: ast_annot.arguments
                .into_iter()
                .map(|(arg_name, arg_val)| (arg_name, Value::from_ast(arg_val)))
                .collect(),
            name: ast_annot.name,
        }).collect()
    }
}
impl std::fmt::Display for DirectiveAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.name)?;
        if !self.arguments.is_empty() {
            write!(f, "(")?;
            for (idx, (arg_name, arg_val)) in self.arguments.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{arg_name}: {arg_val}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}
