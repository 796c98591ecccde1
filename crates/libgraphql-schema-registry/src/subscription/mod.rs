mod context_serializer;
mod graphql_subscription;
mod in_memory_subscription_storage;
mod schema_builder;
mod subscriber;
mod subscription_registry;
mod subscription_registry_error;
mod subscription_storage;

pub use context_serializer::ContextSerializationError;
pub use context_serializer::ContextSerializer;
pub use context_serializer::JsonContextSerializer;
pub use graphql_subscription::GraphQLSubscription;
pub use graphql_subscription::NotFoundSubscription;
pub use in_memory_subscription_storage::InMemorySubscriptionStorage;
pub use schema_builder::SchemaBuilder;
pub use subscriber::Subscriber;
pub use subscription_registry::SubscriptionRegistry;
pub use subscription_registry_error::SubscriptionRegistryError;
pub use subscription_storage::StorageError;
pub use subscription_storage::SubscriptionStorage;

#[cfg(test)]
mod tests;
