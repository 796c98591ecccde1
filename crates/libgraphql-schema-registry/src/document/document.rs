use crate::ast;
use crate::document::DefinitionKind;
use crate::document::DefinitionNode;
use crate::document::DirectiveDefinition;
use crate::document::DocumentError;
use crate::document::EnumTypeDefinition;
use crate::document::FieldDefinition;
use crate::document::InputObjectTypeDefinition;
use crate::document::InterfaceTypeDefinition;
use crate::document::ObjectTypeDefinition;
use crate::document::ScalarTypeDefinition;
use crate::document::SchemaDefinition;
use crate::document::TypeExtensionNode;
use crate::document::UnionTypeDefinition;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, DocumentError>;

/// Either half of a [`Document`]'s contents: a regular definition or a type
/// extension.
///
/// [`Document::set_definition()`] accepts anything convertible into a
/// [`DocumentNode`] and files it into the appropriate index.
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentNode {
    Definition(DefinitionNode),
    TypeExtension(TypeExtensionNode),
}
impl std::convert::From<DefinitionNode> for DocumentNode {
    fn from(def: DefinitionNode) -> Self {
        Self::Definition(def)
    }
}
impl std::convert::From<TypeExtensionNode> for DocumentNode {
    fn from(ext: TypeExtensionNode) -> Self {
        Self::TypeExtension(ext)
    }
}
impl std::convert::From<ObjectTypeDefinition> for DocumentNode {
    fn from(def: ObjectTypeDefinition) -> Self {
        Self::Definition(DefinitionNode::Object(def))
    }
}

/// An in-memory, mutable schema document.
///
/// Regular definitions (types and directives) are indexed by name. Type
/// extensions are indexed separately by their
/// [`unique_key()`](TypeExtensionNode::unique_key) so several `extend`
/// blocks for the same type can live side by side.
///
/// A [`Document`] is typically built once via [`Document::from_source()`],
/// then amended by schema-extension contributors via
/// [`Document::set_definition()`] and [`Document::add_field_to_query_type()`]
/// before an executable schema is built from it.
///
/// Source positions are not retained; nothing in a [`Document`] refers back
/// to the text it was parsed from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub(crate) definitions: IndexMap<String, DefinitionNode>,
    pub(crate) schema_definition: Option<SchemaDefinition>,
    pub(crate) type_extensions: IndexMap<String, TypeExtensionNode>,
}
impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `source` and partitions its definitions into regular
    /// definitions and type extensions.
    ///
    /// Fails with [`DocumentError::SchemaParseError`] when `source` is not
    /// syntactically valid (including source with no definitions at all),
    /// and with
    /// [`DocumentError::DuplicateDefinitionName`] when two non-extension
    /// definitions share a name.
    pub fn from_source(source: &str) -> Result<Self> {
        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(source)
                .map_err(|err| DocumentError::SchemaParseError(err.to_string()))?
                .into_static();

        let mut document = Self::new();
        for def in ast_doc.definitions {
            document.visit_ast_def(def)?;
        }

        log::debug!(
            "Built a document with {} definitions and {} type extensions.",
            document.definitions.len(),
            document.type_extensions.len(),
        );
        Ok(document)
    }

    /// Reconstructs a [`Document`] from the output of
    /// [`Document::serialize()`].
    pub fn from_serialized(bytes: &[u8]) -> Result<Self> {
        let mut document = Self::new();
        document.unserialize(bytes)?;
        Ok(document)
    }

    /// Appends `field` to the root Query type, replacing any existing field
    /// of the same name.
    ///
    /// The root Query type must already be defined: when it isn't, this
    /// returns [`DocumentError::NoQueryTypeDefined`] and leaves the document
    /// unchanged.
    pub fn add_field_to_query_type(
        &mut self,
        field: FieldDefinition,
    ) -> Result<&mut Self> {
        let query_type_name = self.root_type_names().query_type_name().to_string();
        let query_def =
            self.definitions
                .get_mut(query_type_name.as_str())
                .and_then(DefinitionNode::as_object_mut)
                .ok_or_else(|| DocumentError::NoQueryTypeDefined(
                    query_type_name.to_owned(),
                ))?;

        log::debug!(
            "Adding field `{}` to root Query type `{query_type_name}`.",
            field.name(),
        );
        query_def.upsert_field(field);
        Ok(self)
    }

    /// Looks up a regular definition (type or directive) by name.
    pub fn definition(&self, name: &str) -> Option<&DefinitionNode> {
        self.definitions.get(name)
    }

    /// All regular definitions, types and directives alike.
    pub fn definitions(&self) -> impl Iterator<Item = &DefinitionNode> {
        self.definitions.values()
    }

    /// All regular definitions of the given [`DefinitionKind`].
    pub fn definitions_by_kind(
        &self,
        kind: DefinitionKind,
    ) -> impl Iterator<Item = &DefinitionNode> {
        self.definitions.values().filter(move |def| def.kind() == kind)
    }

    pub fn directive_definitions(&self) -> impl Iterator<Item = &DirectiveDefinition> {
        self.definitions.values().filter_map(DefinitionNode::as_directive)
    }

    pub fn enum_type_definitions(&self) -> impl Iterator<Item = &EnumTypeDefinition> {
        self.definitions.values().filter_map(DefinitionNode::as_enum)
    }

    /// All type extensions that target the type named `type_name`, in the
    /// order they were added.
    pub fn extensions_for_type<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = &'a TypeExtensionNode> {
        self.type_extensions.values().filter(move |ext| ext.name() == type_name)
    }

    pub fn input_object_type_definitions(
        &self,
    ) -> impl Iterator<Item = &InputObjectTypeDefinition> {
        self.definitions.values().filter_map(DefinitionNode::as_input_object)
    }

    pub fn interface_type_definitions(
        &self,
    ) -> impl Iterator<Item = &InterfaceTypeDefinition> {
        self.definitions.values().filter_map(DefinitionNode::as_interface)
    }

    /// Folds every type extension whose base type is defined in this
    /// document into that base type, then drops the folded extensions.
    ///
    /// Extensions whose base type is missing (or is a different kind of type)
    /// are left in the extension index.
    pub fn merge_extensions_into_definitions(&mut self) -> &mut Self {
        let extensions = std::mem::take(&mut self.type_extensions);
        for (key, ext) in extensions {
            let Some(base) = self.definitions.get_mut(ext.name()) else {
                log::debug!(
                    "No base type found for type extension `{key}`; leaving \
                    it unmerged.",
                );
                self.type_extensions.insert(key, ext);
                continue;
            };

            if let Err(ext) = ext.merge_into(base) {
                log::warn!(
                    "Type extension `{key}` extends a {} type, but `{}` is a \
                    {} type; leaving it unmerged.",
                    ext.extended_kind().name(),
                    ext.name(),
                    base.kind().name(),
                );
                self.type_extensions.insert(key, ext);
            }
        }
        self
    }

    /// The root Mutation type, if one is defined.
    pub fn mutation_type_definition(&self) -> Option<&ObjectTypeDefinition> {
        self.object_type_definition(self.root_type_names().mutation_type_name())
    }

    /// Looks up an object type by name. Absence is not an error.
    pub fn object_type_definition(&self, name: &str) -> Option<&ObjectTypeDefinition> {
        self.definitions.get(name).and_then(DefinitionNode::as_object)
    }

    pub fn object_type_definitions(&self) -> impl Iterator<Item = &ObjectTypeDefinition> {
        self.definitions.values().filter_map(DefinitionNode::as_object)
    }

    /// The root Query type, if one is defined.
    pub fn query_type_definition(&self) -> Option<&ObjectTypeDefinition> {
        self.object_type_definition(self.root_type_names().query_type_name())
    }

    /// Removes (and returns) the regular definition named `name`.
    pub fn remove_definition(&mut self, name: &str) -> Option<DefinitionNode> {
        self.definitions.shift_remove(name)
    }

    pub fn scalar_type_definitions(&self) -> impl Iterator<Item = &ScalarTypeDefinition> {
        self.definitions.values().filter_map(DefinitionNode::as_scalar)
    }

    /// The `schema { ... }` block, if the source contained one.
    pub fn schema_definition(&self) -> Option<&SchemaDefinition> {
        self.schema_definition.as_ref()
    }

    /// Encodes the regular definitions (and the `schema` block, if any) into
    /// a compact binary form.
    ///
    /// Type extensions are **not** included. The encoding is only meant to be
    /// read back by [`Document::unserialize()`] from the same version of this
    /// crate.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let persisted = PersistedDocumentRef {
            definitions: &self.definitions,
            schema_definition: self.schema_definition.as_ref(),
        };
        bincode::serde::encode_to_vec(&persisted, bincode::config::standard())
            .map_err(|err| DocumentError::SerializationError(err.to_string()))
    }

    /// Inserts or replaces a definition or type extension.
    ///
    /// Regular definitions are keyed by name and type extensions by their
    /// [`unique_key()`](TypeExtensionNode::unique_key). In both cases an
    /// existing entry with the same key is overwritten (last write wins).
    pub fn set_definition(&mut self, node: impl Into<DocumentNode>) -> &mut Self {
        match node.into() {
            DocumentNode::Definition(def) => {
                log::debug!("Setting definition `{}`.", def.name());
                self.definitions.insert(def.name().to_string(), def);
            },

            DocumentNode::TypeExtension(ext) => {
                let key = Self::type_extension_unique_key(&ext);
                log::debug!("Setting type extension `{key}`.");
                self.type_extensions.insert(key, ext);
            },
        }
        self
    }

    /// The root Subscription type, if one is defined.
    pub fn subscription_type_definition(&self) -> Option<&ObjectTypeDefinition> {
        self.object_type_definition(self.root_type_names().subscription_type_name())
    }

    /// Prints the document back out as SDL: the `schema` block (if any),
    /// then every regular definition, then every type extension.
    pub fn to_sdl(&self) -> String {
        self.to_string()
    }

    /// Looks up a type definition (anything but a directive) by name.
    pub fn type_definition(&self, name: &str) -> Option<&DefinitionNode> {
        self.definitions.get(name).filter(|def| def.kind().is_type())
    }

    /// All regular type definitions: scalars, objects, interfaces, unions,
    /// enums and input objects (directive definitions are excluded).
    pub fn type_definitions(&self) -> impl Iterator<Item = &DefinitionNode> {
        self.definitions.values().filter(|def| def.kind().is_type())
    }

    /// Looks up a type extension by its
    /// [`unique_key()`](TypeExtensionNode::unique_key).
    pub fn type_extension(&self, key: &str) -> Option<&TypeExtensionNode> {
        self.type_extensions.get(key)
    }

    /// The key `ext` is (or would be) indexed under. Shorthand for
    /// [`TypeExtensionNode::unique_key()`].
    pub fn type_extension_unique_key(ext: &TypeExtensionNode) -> String {
        ext.unique_key()
    }

    pub fn type_extension_definitions(&self) -> impl Iterator<Item = &TypeExtensionNode> {
        self.type_extensions.values()
    }

    pub fn union_type_definitions(&self) -> impl Iterator<Item = &UnionTypeDefinition> {
        self.definitions.values().filter_map(DefinitionNode::as_union)
    }

    /// Replaces this document's regular definitions (and `schema` block)
    /// with those decoded from `bytes`. Type extensions already held by this
    /// document are left as they are.
    pub fn unserialize(&mut self, bytes: &[u8]) -> Result<()> {
        let (persisted, _len) =
            bincode::serde::decode_from_slice::<PersistedDocument, _>(
                bytes,
                bincode::config::standard(),
            ).map_err(|err| DocumentError::DeserializationError(err.to_string()))?;

        self.definitions = persisted.definitions;
        self.schema_definition = persisted.schema_definition;
        Ok(())
    }

    fn root_type_names(&self) -> std::borrow::Cow<'_, SchemaDefinition> {
        match &self.schema_definition {
            Some(schema_def) => std::borrow::Cow::Borrowed(schema_def),
            None => std::borrow::Cow::Owned(SchemaDefinition::default()),
        }
    }

    fn visit_ast_def(&mut self, def: ast::schema::Definition) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) => {
                if self.schema_definition.is_some() {
                    return Err(DocumentError::DuplicateSchemaDefinition);
                }
                self.schema_definition = Some(SchemaDefinition::from_ast(schema_def));
            },

            Definition::TypeDefinition(type_def) =>
                self.insert_new_definition(DefinitionNode::from_ast_type_def(type_def))?,

            Definition::DirectiveDefinition(directive_def) =>
                self.insert_new_definition(DefinitionNode::Directive(
                    DirectiveDefinition::from_ast(directive_def),
                ))?,

            Definition::TypeExtension(type_ext) => {
                let ext = TypeExtensionNode::from_ast(type_ext);
                self.type_extensions.insert(Self::type_extension_unique_key(&ext), ext);
            },
        }
        Ok(())
    }

    fn insert_new_definition(&mut self, def: DefinitionNode) -> Result<()> {
        if self.definitions.contains_key(def.name()) {
            return Err(DocumentError::DuplicateDefinitionName(def.name().to_string()));
        }
        self.definitions.insert(def.name().to_string(), def);
        Ok(())
    }
}
impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        let mut separate = |f: &mut std::fmt::Formatter<'_>| {
            if first {
                first = false;
                Ok(())
            } else {
                write!(f, "\n\n")
            }
        };

        if let Some(schema_def) = &self.schema_definition {
            separate(f)?;
            write!(f, "{schema_def}")?;
        }
        for def in self.definitions.values() {
            separate(f)?;
            write!(f, "{def}")?;
        }
        for ext in self.type_extensions.values() {
            separate(f)?;
            write!(f, "{ext}")?;
        }
        if !first {
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct PersistedDocumentRef<'a> {
    definitions: &'a IndexMap<String, DefinitionNode>,
    schema_definition: Option<&'a SchemaDefinition>,
}

#[derive(serde::Deserialize)]
struct PersistedDocument {
    definitions: IndexMap<String, DefinitionNode>,
    schema_definition: Option<SchemaDefinition>,
}
