use crate::ast;
use indexmap::IndexMap;

/// A literal [input value](https://spec.graphql.org/October2021/#sec-Input-Values)
/// as it appears in a schema document (directive arguments, default values).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Variable(String),
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub(crate) fn from_ast(ast_value: ast::schema::Value) -> Self {
        use ast::schema::Value as AstValue;
        match ast_value {
            AstValue::Variable(var_name) =>
                Value::Variable(var_name),

            AstValue::Int(value) =>
                value.as_i64().map_or(Value::Null, Value::Int),

            AstValue::Float(value) =>
                Value::Float(value),

            AstValue::String(value) =>
                Value::String(value),

            AstValue::Boolean(value) =>
                Value::Bool(value),

            AstValue::Null =>
                Value::Null,

            AstValue::Enum(value) =>
                Value::Enum(value),

            AstValue::List(values) =>
                Value::List(values.into_iter().map(Value::from_ast).collect()),

            AstValue::Object(entries) =>
                Value::Object(entries.into_iter().map(|(key, ast_value)|
                    (key, Value::from_ast(ast_value))
                ).collect()),
        }
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "${name}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => {
                // Keep a fractional part so the literal re-parses as a Float.
                if value.fract() == 0.0 && value.is_finite() {
                    write!(f, "{value:.1}")
                } else {
                    write!(f, "{value}")
                }
            },
            Self::String(value) => write_quoted_string(f, value),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Enum(name) => write!(f, "{name}"),
            Self::List(values) => {
                write!(f, "[")?;
                for (idx, value) in values.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            },
            Self::Object(entries) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}

pub(crate) fn write_quoted_string(
    f: &mut std::fmt::Formatter<'_>,
    value: &str,
) -> std::fmt::Result {
    write!(f, "\"")?;
    for ch in value.chars() {
        match ch {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            ch if ch.is_control() => write!(f, "\\u{:04X}", ch as u32)?,
            ch => write!(f, "{ch}")?,
        }
    }
    write!(f, "\"")
}
