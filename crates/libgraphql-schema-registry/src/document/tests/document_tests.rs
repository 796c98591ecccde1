use crate::document::DefinitionKind;
use crate::document::DefinitionNode;
use crate::document::Document;
use crate::document::DocumentError;
use crate::document::FieldDefinition;
use crate::document::ObjectTypeDefinition;
use crate::document::TypeAnnotation;
use crate::document::partial_parser;
use proptest::prelude::*;
use std::collections::BTreeSet;

type Result<T> = std::result::Result<T, DocumentError>;

const KITCHEN_SINK_SCHEMA: &str = concat!(
    "scalar DateTime\n",
    "type Query { me: User }\n",
    "interface Node { id: ID! }\n",
    "type User implements Node { id: ID! name: String }\n",
    "union SearchResult = User\n",
    "enum Role { ADMIN MEMBER }\n",
    "input UserFilter { role: Role = MEMBER }\n",
    "directive @auth(requires: Role = ADMIN) on FIELD_DEFINITION\n",
    "extend type User { role: Role }\n",
);

fn names<'a>(defs: impl Iterator<Item = &'a DefinitionNode>) -> BTreeSet<&'a str> {
    defs.map(DefinitionNode::name).collect()
}

mod from_source {
    use super::*;

    #[test]
    fn partitions_definitions_and_extensions() -> Result<()> {
        let document = Document::from_source(KITCHEN_SINK_SCHEMA)?;

        assert_eq!(document.definitions().count(), 8);
        assert_eq!(document.type_extension_definitions().count(), 1);
        assert!(document.definition("auth").is_some());
        assert!(document.type_extension("User:role").is_some());

        Ok(())
    }

    #[test]
    fn type_definitions_are_exactly_the_named_types() -> Result<()> {
        let document = Document::from_source(KITCHEN_SINK_SCHEMA)?;

        assert_eq!(names(document.type_definitions()), BTreeSet::from([
            "DateTime",
            "Node",
            "Query",
            "Role",
            "SearchResult",
            "User",
            "UserFilter",
        ]));

        Ok(())
    }

    #[test]
    fn definitions_by_kind_filters_on_kind() -> Result<()> {
        let document = Document::from_source(KITCHEN_SINK_SCHEMA)?;

        assert_eq!(
            names(document.definitions_by_kind(DefinitionKind::Object)),
            BTreeSet::from(["Query", "User"]),
        );
        assert_eq!(
            names(document.definitions_by_kind(DefinitionKind::Directive)),
            BTreeSet::from(["auth"]),
        );
        assert_eq!(document.interface_type_definitions().count(), 1);
        assert_eq!(document.input_object_type_definitions().count(), 1);
        assert_eq!(document.enum_type_definitions().count(), 1);
        assert_eq!(document.union_type_definitions().count(), 1);
        assert_eq!(document.scalar_type_definitions().count(), 1);
        assert_eq!(document.directive_definitions().count(), 1);

        Ok(())
    }

    #[test]
    fn kind_specific_structure_is_retained() -> Result<()> {
        let document = Document::from_source(KITCHEN_SINK_SCHEMA)?;

        let user = document.object_type_definition("User").unwrap();
        assert_eq!(user.implements_interfaces(), ["Node".to_string()]);
        assert_eq!(
            user.fields().iter().map(FieldDefinition::name).collect::<Vec<_>>(),
            vec!["id", "name"],
        );
        assert_eq!(
            user.field("id").unwrap().field_type(),
            &TypeAnnotation::NonNull(Box::new(TypeAnnotation::named("ID"))),
        );

        let role = document.definition("Role").and_then(DefinitionNode::as_enum).unwrap();
        assert_eq!(
            role.values().iter().map(|v| v.name()).collect::<Vec<_>>(),
            vec!["ADMIN", "MEMBER"],
        );

        let auth = document.directive_definitions().next().unwrap();
        assert_eq!(auth.locations(), ["FIELD_DEFINITION".to_string()]);
        assert!(!auth.is_repeatable());

        Ok(())
    }

    #[test]
    fn invalid_syntax_is_a_schema_parse_error() {
        let result = Document::from_source("this is not valid syntax");

        assert!(matches!(result, Err(DocumentError::SchemaParseError(_))));
    }

    #[test]
    fn unterminated_type_is_a_schema_parse_error() {
        let result = Document::from_source("type Query { foo: String");

        assert!(matches!(result, Err(DocumentError::SchemaParseError(_))));
    }

    #[test]
    fn duplicate_definition_names_are_rejected() {
        let result = Document::from_source(concat!(
            "type Query { foo: String }\n",
            "type Query { bar: String }\n",
        ));

        assert_eq!(
            result,
            Err(DocumentError::DuplicateDefinitionName("Query".to_string())),
        );
    }

    #[test]
    fn duplicate_schema_blocks_are_rejected() {
        let result = Document::from_source(concat!(
            "schema { query: Query }\n",
            "schema { query: Query }\n",
            "type Query { foo: String }\n",
        ));

        assert_eq!(result, Err(DocumentError::DuplicateSchemaDefinition));
    }

    #[test]
    fn source_without_definitions_is_a_parse_error() {
        assert!(matches!(
            Document::from_source(""),
            Err(DocumentError::SchemaParseError(_)),
        ));
        assert!(matches!(
            Document::from_source("  \n# only a comment\n"),
            Err(DocumentError::SchemaParseError(_)),
        ));
    }
}

mod lookups {
    use super::*;

    #[test]
    fn missing_object_type_is_none() -> Result<()> {
        let document = Document::from_source("type Query { foo: String }")?;

        assert!(document.object_type_definition("Nope").is_none());

        Ok(())
    }

    #[test]
    fn object_type_lookup_ignores_other_kinds() -> Result<()> {
        let document = Document::from_source("type Query { foo: String } enum Color { RED }")?;

        assert!(document.object_type_definition("Color").is_none());
        assert!(document.type_definition("Color").is_some());

        Ok(())
    }

    #[test]
    fn directive_is_not_a_type_definition() -> Result<()> {
        let document = Document::from_source("directive @cached on FIELD_DEFINITION")?;

        assert!(document.definition("cached").is_some());
        assert!(document.type_definition("cached").is_none());

        Ok(())
    }

    #[test]
    fn absent_root_types_are_none() -> Result<()> {
        let document = Document::from_source("type Query { foo: String }")?;

        assert_eq!(document.query_type_definition().unwrap().name(), "Query");
        assert!(document.mutation_type_definition().is_none());
        assert!(document.subscription_type_definition().is_none());

        Ok(())
    }

    #[test]
    fn root_types_by_default_names() -> Result<()> {
        let document = Document::from_source(concat!(
            "type Query { foo: String }\n",
            "type Mutation { setFoo: String }\n",
            "type Subscription { fooChanged: String }\n",
        ))?;

        assert_eq!(document.mutation_type_definition().unwrap().name(), "Mutation");
        assert_eq!(
            document.subscription_type_definition().unwrap().name(),
            "Subscription",
        );

        Ok(())
    }

    #[test]
    fn schema_block_renames_root_types() -> Result<()> {
        let document = Document::from_source(concat!(
            "schema { query: RootQuery subscription: Events }\n",
            "type RootQuery { foo: String }\n",
            "type Query { unrelated: String }\n",
            "type Events { fooChanged: String }\n",
        ))?;

        assert_eq!(document.query_type_definition().unwrap().name(), "RootQuery");
        assert_eq!(document.subscription_type_definition().unwrap().name(), "Events");
        assert!(document.mutation_type_definition().is_none());

        Ok(())
    }
}

mod set_definition {
    use super::*;

    #[test]
    fn inserts_new_definition() -> Result<()> {
        let mut document = Document::from_source("type Query { foo: String }")?;

        document.set_definition(
            ObjectTypeDefinition::new("User")
                .with_field(FieldDefinition::new("id", TypeAnnotation::named("ID"))),
        );

        let user = document.object_type_definition("User").unwrap();
        assert_eq!(user.fields().len(), 1);

        Ok(())
    }

    #[test]
    fn last_write_wins() -> Result<()> {
        let mut document = Document::from_source("type User { id: ID }")?;

        document.set_definition(partial_parser::parse_definition(
            "enum User { A B }",
        )?);

        assert_eq!(
            document.definition("User").map(DefinitionNode::kind),
            Some(DefinitionKind::Enum),
        );
        assert_eq!(document.definitions().count(), 1);

        Ok(())
    }

    #[test]
    fn routes_extensions_to_extension_index() -> Result<()> {
        let mut document = Document::from_source("type User { id: ID }")?;

        document.set_definition(partial_parser::parse_type_extension(
            "extend type User { name: String }",
        )?);

        assert_eq!(document.definitions().count(), 1);
        assert!(document.type_extension("User:name").is_some());
        assert_eq!(document.object_type_definition("User").unwrap().fields().len(), 1);

        Ok(())
    }

    #[test]
    fn remove_definition() -> Result<()> {
        let mut document = Document::from_source("type Query { foo: String } scalar Date")?;

        let removed = document.remove_definition("Date");

        assert_eq!(removed.map(|def| def.kind()), Some(DefinitionKind::Scalar));
        assert!(document.definition("Date").is_none());
        assert!(document.remove_definition("Date").is_none());

        Ok(())
    }
}

mod add_field_to_query_type {
    use super::*;

    fn query_field_names(document: &Document) -> Vec<&str> {
        document.query_type_definition()
            .unwrap()
            .fields()
            .iter()
            .map(FieldDefinition::name)
            .collect()
    }

    #[test]
    fn appends_field() -> Result<()> {
        let mut document = Document::from_source("type Query { foo: String }")?;

        document.add_field_to_query_type(
            partial_parser::parse_field_definition("bar: String")?,
        )?;

        assert_eq!(query_field_names(&document), vec!["foo", "bar"]);

        Ok(())
    }

    #[test]
    fn same_field_twice_is_deduplicated() -> Result<()> {
        let mut document = Document::from_source("type Query { foo: String }")?;

        document
            .add_field_to_query_type(FieldDefinition::new("bar", TypeAnnotation::named("String")))?
            .add_field_to_query_type(FieldDefinition::new("bar", TypeAnnotation::named("String")))?;

        assert_eq!(query_field_names(&document), vec!["foo", "bar"]);

        Ok(())
    }

    #[test]
    fn last_added_field_wins() -> Result<()> {
        let mut document = Document::from_source("type Query { foo: String bar: Int }")?;

        document.add_field_to_query_type(
            partial_parser::parse_field_definition("foo(id: ID!): Int!")?,
        )?;

        let query = document.query_type_definition().unwrap();
        assert_eq!(query_field_names(&document), vec!["foo", "bar"]);
        let foo = query.field("foo").unwrap();
        assert_eq!(foo.field_type().to_string(), "Int!");
        assert_eq!(foo.arguments().len(), 1);

        Ok(())
    }

    #[test]
    fn honors_renamed_query_type() -> Result<()> {
        let mut document = Document::from_source(concat!(
            "schema { query: Root }\n",
            "type Root { foo: String }\n",
        ))?;

        document.add_field_to_query_type(FieldDefinition::new("bar", TypeAnnotation::named("Int")))?;

        assert_eq!(query_field_names(&document), vec!["foo", "bar"]);

        Ok(())
    }

    #[test]
    fn missing_query_type_is_an_error() -> Result<()> {
        let mut document = Document::from_source("type User { id: ID }")?;
        let before = document.clone();

        let result = document
            .add_field_to_query_type(FieldDefinition::new("bar", TypeAnnotation::named("Int")))
            .map(|_| ());

        assert_eq!(result, Err(DocumentError::NoQueryTypeDefined("Query".to_string())));
        assert_eq!(document, before);

        Ok(())
    }

    #[test]
    fn non_object_query_type_is_an_error() -> Result<()> {
        let mut document = Document::from_source("enum Query { A }")?;

        let result = document
            .add_field_to_query_type(FieldDefinition::new("bar", TypeAnnotation::named("Int")))
            .map(|_| ());

        assert!(matches!(result, Err(DocumentError::NoQueryTypeDefined(_))));

        Ok(())
    }

    proptest! {
        #[test]
        fn field_names_stay_unique(
            additions in proptest::collection::vec("[a-e]", 0..20),
        ) {
            let mut document = Document::from_source("type Query { a: String }").unwrap();
            for name in &additions {
                document
                    .add_field_to_query_type(FieldDefinition::new(
                        name.as_str(),
                        TypeAnnotation::named("String"),
                    ))
                    .unwrap();
            }

            let mut expected = vec!["a"];
            for name in &additions {
                if !expected.contains(&name.as_str()) {
                    expected.push(name.as_str());
                }
            }
            prop_assert_eq!(query_field_names(&document), expected);
        }
    }
}
