use crate::document::DefinitionKind;
use crate::document::Document;
use crate::document::DocumentError;
use crate::document::FieldDefinition;
use crate::document::ObjectTypeExtension;
use crate::document::TypeAnnotation;
use crate::document::TypeExtensionNode;
use crate::document::partial_parser;
use proptest::prelude::*;

type Result<T> = std::result::Result<T, DocumentError>;

fn field_names(ext: &TypeExtensionNode) -> Vec<&str> {
    ext.as_object()
        .expect("extension is an object type extension")
        .fields()
        .iter()
        .map(FieldDefinition::name)
        .collect()
}

mod unique_key {
    use super::*;

    #[test]
    fn joins_type_name_and_field_names_in_order() -> Result<()> {
        let ext = partial_parser::parse_type_extension(
            "extend type Query { b: Int a: Int }",
        )?;

        assert_eq!(ext.unique_key(), "Query:b:a");
        assert_eq!(Document::type_extension_unique_key(&ext), "Query:b:a");

        Ok(())
    }

    #[test]
    fn enum_and_union_extensions_key_on_their_members() -> Result<()> {
        let enum_ext = partial_parser::parse_type_extension("extend enum Role { OWNER }")?;
        let union_ext = partial_parser::parse_type_extension("extend union Result = Post | Comment")?;
        let scalar_ext = partial_parser::parse_type_extension("extend scalar Date @specifiedBy(url: \"x\")")?;

        assert_eq!(enum_ext.unique_key(), "Role:OWNER");
        assert_eq!(union_ext.unique_key(), "Result:Post:Comment");
        assert_eq!(scalar_ext.unique_key(), "Date:specifiedBy");
        assert_eq!(scalar_ext.extended_kind(), DefinitionKind::Scalar);

        Ok(())
    }

    proptest! {
        #[test]
        fn key_starts_with_type_name_and_lists_every_field(
            type_name in "[A-Z][a-z]{0,8}",
            fields in proptest::collection::vec("[a-z]{1,6}", 0..6),
        ) {
            let ext = fields.iter().fold(
                ObjectTypeExtension::new(type_name.as_str()),
                |ext, name| ext.with_field(FieldDefinition::new(
                    name.as_str(),
                    TypeAnnotation::named("Int"),
                )),
            );
            let key = TypeExtensionNode::from(ext).unique_key();

            let mut expected_parts = vec![type_name.as_str()];
            expected_parts.extend(fields.iter().map(String::as_str));
            if fields.is_empty() {
                expected_parts.push("");
            }
            prop_assert_eq!(key.split(':').collect::<Vec<_>>(), expected_parts);
        }
    }
}

mod indexing {
    use super::*;

    #[test]
    fn disjoint_extensions_of_same_type_coexist() -> Result<()> {
        let document = Document::from_source(concat!(
            "type User { id: ID }\n",
            "extend type User { name: String }\n",
            "extend type User { email: String }\n",
        ))?;

        let extensions = document.extensions_for_type("User").collect::<Vec<_>>();
        assert_eq!(extensions.len(), 2);
        assert_eq!(field_names(extensions[0]), vec!["name"]);
        assert_eq!(field_names(extensions[1]), vec!["email"]);

        Ok(())
    }

    #[test]
    fn extensions_for_other_types_are_excluded() -> Result<()> {
        let document = Document::from_source(concat!(
            "extend type User { name: String }\n",
            "extend type Post { title: String }\n",
        ))?;

        assert_eq!(document.extensions_for_type("Post").count(), 1);
        assert_eq!(document.extensions_for_type("Comment").count(), 0);

        Ok(())
    }

    #[test]
    fn identical_field_sets_collide() -> Result<()> {
        let document = Document::from_source(concat!(
            "extend type User { name: String }\n",
            "extend type User { name: Int }\n",
        ))?;

        let extensions = document.extensions_for_type("User").collect::<Vec<_>>();
        assert_eq!(extensions.len(), 1);
        let name_field = &extensions[0].as_object().unwrap().fields()[0];
        assert_eq!(name_field.field_type(), &TypeAnnotation::named("Int"));

        Ok(())
    }

    #[test]
    fn extensions_are_not_type_definitions() -> Result<()> {
        let document = Document::from_source("extend type User { name: String }")?;

        assert_eq!(document.type_definitions().count(), 0);
        assert!(document.object_type_definition("User").is_none());

        Ok(())
    }
}

mod merging {
    use super::*;

    #[test]
    fn folds_extensions_into_base_types() -> Result<()> {
        let mut document = Document::from_source(concat!(
            "interface Node { id: ID! }\n",
            "type User { id: ID! name: String }\n",
            "enum Role { ADMIN }\n",
            "union Owner = User\n",
            "type Team { id: ID! }\n",
            "extend type User implements Node @key(fields: \"id\") { name: String! email: String }\n",
            "extend enum Role { MEMBER }\n",
            "extend union Owner = Team\n",
        ))?;

        document.merge_extensions_into_definitions();

        assert_eq!(document.type_extension_definitions().count(), 0);

        let user = document.object_type_definition("User").unwrap();
        assert_eq!(
            user.fields().iter().map(FieldDefinition::name).collect::<Vec<_>>(),
            vec!["id", "name", "email"],
        );
        assert_eq!(user.field("name").unwrap().field_type().to_string(), "String!");
        assert_eq!(user.implements_interfaces(), ["Node".to_string()]);
        assert_eq!(user.directives()[0].name(), "key");

        let role = document.definition("Role").unwrap().as_enum().unwrap();
        assert_eq!(role.values().len(), 2);

        let owner = document.definition("Owner").unwrap().as_union().unwrap();
        assert_eq!(owner.member_types(), ["User".to_string(), "Team".to_string()]);

        Ok(())
    }

    #[test]
    fn unmatched_extensions_stay_in_place() -> Result<()> {
        let mut document = Document::from_source(concat!(
            "enum Post { DRAFT }\n",
            "extend type Post { title: String }\n",
            "extend type Comment { body: String }\n",
        ))?;

        document.merge_extensions_into_definitions();

        assert_eq!(document.type_extension_definitions().count(), 2);
        assert!(document.type_extension("Post:title").is_some());
        assert!(document.type_extension("Comment:body").is_some());

        Ok(())
    }
}
