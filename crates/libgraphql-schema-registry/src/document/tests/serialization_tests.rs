use crate::document::Document;
use crate::document::DocumentError;
use crate::document::FieldDefinition;
use crate::document::ObjectTypeDefinition;

type Result<T> = std::result::Result<T, DocumentError>;

const SCHEMA: &str = concat!(
    "\"\"\"The root\"\"\"\n",
    "type Query { users(first: Int = 10, after: String): [User!]! @cost(weight: 1.5) }\n",
    "type User { id: ID! name: String tags: [String] }\n",
    "enum Role { ADMIN MEMBER }\n",
    "input Filter { role: Role = ADMIN, ids: [ID!] = [\"1\", \"2\"] }\n",
    "directive @cost(weight: Float) on FIELD_DEFINITION\n",
);

#[test]
fn round_trips_regular_definitions() -> Result<()> {
    let document = Document::from_source(SCHEMA)?;

    let restored = Document::from_serialized(document.serialize()?.as_slice())?;

    assert_eq!(
        restored.type_definitions().collect::<Vec<_>>(),
        document.type_definitions().collect::<Vec<_>>(),
    );
    assert_eq!(
        restored.object_type_definitions().collect::<Vec<&ObjectTypeDefinition>>(),
        document.object_type_definitions().collect::<Vec<_>>(),
    );
    assert_eq!(restored, document);

    Ok(())
}

#[test]
fn round_trip_keeps_field_lists_and_names() -> Result<()> {
    let document = Document::from_source(SCHEMA)?;

    let restored = Document::from_serialized(document.serialize()?.as_slice())?;

    let query = restored.query_type_definition().unwrap();
    assert_eq!(query.name(), "Query");
    assert_eq!(query.description(), Some("The root"));
    assert_eq!(
        query.fields().iter().map(FieldDefinition::name).collect::<Vec<_>>(),
        vec!["users"],
    );
    assert_eq!(query.fields()[0].field_type().to_string(), "[User!]!");

    Ok(())
}

#[test]
fn round_trip_keeps_schema_block() -> Result<()> {
    let document = Document::from_source(concat!(
        "schema { query: Root }\n",
        "type Root { foo: String }\n",
    ))?;

    let restored = Document::from_serialized(document.serialize()?.as_slice())?;

    assert_eq!(restored.query_type_definition().unwrap().name(), "Root");

    Ok(())
}

#[test]
fn type_extensions_are_not_persisted() -> Result<()> {
    let document = Document::from_source(concat!(
        "type Query { foo: String }\n",
        "extend type Query { bar: String }\n",
    ))?;

    let restored = Document::from_serialized(document.serialize()?.as_slice())?;

    assert_eq!(restored.type_extension_definitions().count(), 0);
    assert_eq!(
        restored.type_definitions().collect::<Vec<_>>(),
        document.type_definitions().collect::<Vec<_>>(),
    );

    Ok(())
}

#[test]
fn unserialize_replaces_definitions_in_place() -> Result<()> {
    let persisted = Document::from_source("type Query { foo: String }")?.serialize()?;
    let mut document = Document::from_source(concat!(
        "type Mutation { bar: String }\n",
        "extend type Mutation { baz: String }\n",
    ))?;

    document.unserialize(persisted.as_slice())?;

    assert!(document.query_type_definition().is_some());
    assert!(document.mutation_type_definition().is_none());
    assert_eq!(document.type_extension_definitions().count(), 1);

    Ok(())
}

#[test]
fn garbage_bytes_are_a_deserialization_error() {
    let result = Document::from_serialized(&[0xff, 0xff, 0xff, 0xff, 0xff]);

    assert!(matches!(result, Err(DocumentError::DeserializationError(_))));
}
