//! A mutable, serializable model of a GraphQL schema document paired with a
//! registry of live subscription handlers.
//!
//! [`Document`](document::Document) holds the type system definitions of a
//! schema while schema-extension contributors are still adding to it.
//! [`SubscriptionRegistry`](subscription::SubscriptionRegistry) maps
//! subscription root fields to their handlers and tracks which operations
//! are currently subscribed on which channel.

pub(crate) mod ast;
pub mod document;
pub mod subscription;

pub use document::Document;
pub use document::DocumentError;
pub use subscription::SubscriptionRegistry;
pub use subscription::SubscriptionRegistryError;
