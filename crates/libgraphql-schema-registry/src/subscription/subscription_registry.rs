use crate::ast;
use crate::subscription::ContextSerializer;
use crate::subscription::GraphQLSubscription;
use crate::subscription::NotFoundSubscription;
use crate::subscription::SchemaBuilder;
use crate::subscription::Subscriber;
use crate::subscription::SubscriptionRegistryError;
use crate::subscription::SubscriptionStorage;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SubscriptionRegistryError>;

/// Maps subscription root fields to their [`GraphQLSubscription`] handlers
/// and tracks which operations are subscribed on which channel.
///
/// The two halves have different lifetimes:
///
/// * Handlers are [`register()`](Self::register)ed once while the schema is
///   built and stay put for as long as that schema is in use.
/// * Subscribers recorded via [`subscriber()`](Self::subscriber) belong to
///   the request currently being handled. Whoever drives request handling
///   must call [`reset()`](Self::reset) at the start of every request, or
///   entries leak from one request into the next when workers are reused.
///
/// A [`SubscriptionRegistry`] is not meant to be mutated from several
/// threads at once; once registration is done it can be shared for reads.
pub struct SubscriptionRegistry {
    context_serializer: Arc<dyn ContextSerializer>,
    not_found: Arc<dyn GraphQLSubscription>,
    schema_builder: Arc<dyn SchemaBuilder>,
    storage: Arc<dyn SubscriptionStorage>,
    subscribers: IndexMap<String, String>,
    subscriptions: HashMap<String, Arc<dyn GraphQLSubscription>>,
}
impl SubscriptionRegistry {
    pub fn new(
        context_serializer: Arc<dyn ContextSerializer>,
        storage: Arc<dyn SubscriptionStorage>,
        schema_builder: Arc<dyn SchemaBuilder>,
    ) -> Self {
        Self {
            context_serializer,
            not_found: Arc::new(NotFoundSubscription),
            schema_builder,
            storage,
            subscribers: IndexMap::new(),
            subscriptions: HashMap::new(),
        }
    }

    /// The serializer subscriber contexts are stored with.
    pub fn context_serializer(&self) -> &Arc<dyn ContextSerializer> {
        &self.context_serializer
    }

    /// Fetches the handler registered for `field_name`, if there is one.
    pub fn get(&self, field_name: &str) -> Option<&Arc<dyn GraphQLSubscription>> {
        self.subscriptions.get(field_name)
    }

    pub fn has(&self, field_name: &str) -> bool {
        self.subscriptions.contains_key(field_name)
    }

    /// Names of every subscription field that has a registered handler.
    pub fn keys(&self) -> HashSet<&str> {
        self.subscriptions.keys().map(String::as_str).collect()
    }

    /// Registers `handler` for the subscription field `field_name`. A later
    /// registration for the same field replaces an earlier one.
    pub fn register(
        &mut self,
        handler: Arc<dyn GraphQLSubscription>,
        field_name: impl Into<String>,
    ) -> &mut Self {
        let field_name = field_name.into();
        log::debug!("Registering subscription handler for field `{field_name}`.");
        if self.subscriptions.insert(field_name.to_owned(), handler).is_some() {
            log::debug!(
                "Replaced a previously registered handler for subscription \
                field `{field_name}`.",
            );
        }
        self
    }

    /// Forgets every subscriber recorded during the current request.
    pub fn reset(&mut self) {
        self.subscribers.clear();
    }

    /// The storage collaborator subscribers with a channel are persisted to.
    pub fn storage(&self) -> &Arc<dyn SubscriptionStorage> {
        &self.storage
    }

    /// Records that `subscriber`'s operation is subscribed on `channel`.
    ///
    /// A non-empty `channel` is also persisted through the
    /// [`SubscriptionStorage`] so other processes can find the subscriber;
    /// an empty one is only recorded locally.
    ///
    /// Only the `channel` argument is consulted. Whatever
    /// [`Subscriber::channel()`] already holds is ignored, so a subscriber
    /// built with a channel but passed here with `""` is not stored.
    pub fn subscriber(
        &mut self,
        subscriber: &Subscriber,
        channel: &str,
    ) -> Result<&mut Self> {
        if !channel.is_empty() {
            self.storage.store_subscriber(subscriber, channel)?;
        }
        self.subscribers.insert(
            subscriber.operation_name().to_string(),
            channel.to_string(),
        );
        Ok(self)
    }

    /// Returns the handler registered for `field_name`.
    ///
    /// # Panics
    ///
    /// Panics if no handler was registered for `field_name`; check with
    /// [`has()`](Self::has) first (or use [`get()`](Self::get)).
    pub fn subscription(&self, field_name: &str) -> &Arc<dyn GraphQLSubscription> {
        self.subscriptions.get(field_name).unwrap_or_else(|| panic!(
            "No subscription handler is registered for field `{field_name}`",
        ))
    }

    /// Parses `query_string` and lists the root fields selected by each of
    /// its subscription operations, in document order. Query and mutation
    /// operations are ignored and nested selections are not descended into.
    /// Fragments spread (or inlined) directly into a subscription's root
    /// selection set contribute their fields in place.
    pub fn subscription_field_names(query_string: &str) -> Result<Vec<String>> {
        let ast_doc =
            graphql_parser::query::parse_query::<String>(query_string)
                .map_err(|err| SubscriptionRegistryError::SyntaxError(err.to_string()))?
                .into_static();

        let fragments: HashMap<&str, &ast::query::SelectionSet> =
            ast_doc.definitions
                .iter()
                .filter_map(|def| match def {
                    ast::query::Definition::Fragment(frag) =>
                        Some((frag.name.as_str(), &frag.selection_set)),
                    ast::query::Definition::Operation(_) => None,
                })
                .collect();

        let mut field_names = vec![];
        for def in &ast_doc.definitions {
            if let ast::query::Definition::Operation(
                ast::query::OperationDefinition::Subscription(subscription),
            ) = def {
                collect_root_field_names(
                    &subscription.selection_set,
                    &fragments,
                    &mut HashSet::new(),
                    &mut field_names,
                );
            }
        }
        Ok(field_names)
    }

    /// Resolves the handlers `subscriber`'s query invokes: one per
    /// subscription root field selected, in document order, duplicates
    /// included. The result lines up index for index with
    /// [`subscription_field_names()`](Self::subscription_field_names) for the
    /// same query string.
    ///
    /// A field nobody registered resolves to [`NotFoundSubscription`] rather
    /// than an error. A query string that does not parse is a
    /// [`SubscriptionRegistryError::SyntaxError`].
    pub fn subscriptions(
        &self,
        subscriber: &Subscriber,
    ) -> Result<Vec<Arc<dyn GraphQLSubscription>>> {
        self.schema_builder.ensure_schema_built();

        let field_names = Self::subscription_field_names(subscriber.query_string())?;
        log::trace!(
            "Operation `{}` selects subscription fields: {field_names:?}",
            subscriber.operation_name(),
        );

        Ok(field_names.iter().map(|field_name| {
            match self.subscriptions.get(field_name.as_str()) {
                Some(handler) => Arc::clone(handler),
                None => {
                    log::warn!(
                        "No subscription handler is registered for field \
                        `{field_name}` (selected by operation `{}`).",
                        subscriber.operation_name(),
                    );
                    Arc::clone(&self.not_found)
                },
            }
        }).collect())
    }

    /// A snapshot of the subscribers recorded during the current request, as
    /// OperationName -> Channel.
    pub fn to_map(&self) -> IndexMap<String, String> {
        self.subscribers.clone()
    }
}
impl std::fmt::Debug for SubscriptionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionRegistry")
            .field("subscribers", &self.subscribers)
            .field("subscriptions", &self.subscriptions)
            .finish_non_exhaustive()
    }
}

fn collect_root_field_names<'doc>(
    selection_set: &'doc ast::query::SelectionSet,
    fragments: &HashMap<&'doc str, &'doc ast::query::SelectionSet>,
    expanding_fragments: &mut HashSet<&'doc str>,
    field_names: &mut Vec<String>,
) {
    for selection in &selection_set.items {
        match selection {
            ast::query::Selection::Field(field) =>
                field_names.push(field.name.to_owned()),

            ast::query::Selection::InlineFragment(inline_fragment) =>
                collect_root_field_names(
                    &inline_fragment.selection_set,
                    fragments,
                    expanding_fragments,
                    field_names,
                ),

            ast::query::Selection::FragmentSpread(spread) => {
                let fragment_name = spread.fragment_name.as_str();
                let Some(&fragment_selection_set) = fragments.get(fragment_name) else {
                    log::warn!("Spread of undefined fragment `{fragment_name}`; skipping.");
                    continue;
                };
                // Cyclic spreads are invalid GraphQL; stop rather than recurse
                // forever.
                if !expanding_fragments.insert(fragment_name) {
                    continue;
                }
                collect_root_field_names(
                    fragment_selection_set,
                    fragments,
                    expanding_fragments,
                    field_names,
                );
                expanding_fragments.remove(fragment_name);
            },
        }
    }
}
