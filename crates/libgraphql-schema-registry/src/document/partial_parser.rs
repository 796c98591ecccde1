//! Parsers for single schema snippets, for code that contributes
//! definitions to a [`Document`](crate::document::Document) after it was
//! built from source.

use crate::ast;
use crate::document::DefinitionNode;
use crate::document::DirectiveDefinition;
use crate::document::DocumentError;
use crate::document::DocumentNode;
use crate::document::FieldDefinition;
use crate::document::TypeExtensionNode;

type Result<T> = std::result::Result<T, DocumentError>;

const PARTIAL_TYPE_NAME: &str = "__PartialParse";

/// Parses exactly one definition or type extension, e.g.
/// `"type Foo { bar: Int }"` or `"extend type Query { foo: Foo }"`.
pub fn parse_document_node(sdl: &str) -> Result<DocumentNode> {
    let mut definitions = parse_ast_definitions(sdl)?;
    if definitions.len() != 1 {
        return Err(DocumentError::PartialParseError(format!(
            "expected exactly 1 definition, found {}",
            definitions.len(),
        )));
    }

    match definitions.remove(0) {
        ast::schema::Definition::TypeDefinition(def) =>
            Ok(DocumentNode::Definition(DefinitionNode::from_ast_type_def(def))),

        ast::schema::Definition::DirectiveDefinition(def) =>
            Ok(DocumentNode::Definition(DefinitionNode::Directive(
                DirectiveDefinition::from_ast(def),
            ))),

        ast::schema::Definition::TypeExtension(ext) =>
            Ok(DocumentNode::TypeExtension(TypeExtensionNode::from_ast(ext))),

        ast::schema::Definition::SchemaDefinition(_) =>
            Err(DocumentError::PartialParseError(
                "`schema` definitions cannot be parsed as a single node".to_string(),
            )),
    }
}

/// Parses exactly one non-extension definition.
pub fn parse_definition(sdl: &str) -> Result<DefinitionNode> {
    match parse_document_node(sdl)? {
        DocumentNode::Definition(def) => Ok(def),
        DocumentNode::TypeExtension(ext) => Err(DocumentError::PartialParseError(
            format!("expected a definition, found an extension of `{}`", ext.name()),
        )),
    }
}

/// Parses exactly one type extension.
pub fn parse_type_extension(sdl: &str) -> Result<TypeExtensionNode> {
    match parse_document_node(sdl)? {
        DocumentNode::TypeExtension(ext) => Ok(ext),
        DocumentNode::Definition(def) => Err(DocumentError::PartialParseError(
            format!("expected a type extension, found a definition of `{}`", def.name()),
        )),
    }
}

/// Parses one field definition as it would appear inside an object type,
/// e.g. `"user(id: ID!): User @deprecated"`.
pub fn parse_field_definition(sdl: &str) -> Result<FieldDefinition> {
    let wrapped = format!("type {PARTIAL_TYPE_NAME} {{\n{sdl}\n}}");
    let def = parse_definition(wrapped.as_str())?;
    let mut fields = match def {
        DefinitionNode::Object(obj_def) => obj_def.fields,
        _ => vec![],
    };
    if fields.len() != 1 {
        return Err(DocumentError::PartialParseError(format!(
            "expected exactly 1 field definition, found {}",
            fields.len(),
        )));
    }
    Ok(fields.remove(0))
}

fn parse_ast_definitions(sdl: &str) -> Result<Vec<ast::schema::Definition>> {
    let ast_doc =
        graphql_parser::schema::parse_schema::<String>(sdl)
            .map_err(|err| DocumentError::PartialParseError(err.to_string()))?
            .into_static();
    Ok(ast_doc.definitions)
}
