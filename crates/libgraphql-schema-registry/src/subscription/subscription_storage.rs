use crate::subscription::Subscriber;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum StorageError {
    #[error("Subscription storage backend failure: {0}")]
    Backend(String),

    #[error("Could not encode or decode a stored subscriber: {0}")]
    Encoding(String),
}

/// Durable (or at least process-external) storage for subscribers that own a
/// channel.
///
/// This is how a subscriber survives beyond the request that created it:
/// an event published on another worker finds its subscribers here.
pub trait SubscriptionStorage: Send + Sync {
    /// Persists `subscriber` under `channel`, replacing whatever was stored
    /// for that channel before.
    fn store_subscriber(
        &self,
        subscriber: &Subscriber,
        channel: &str,
    ) -> Result<(), StorageError>;

    fn subscriber_by_channel(
        &self,
        channel: &str,
    ) -> Result<Option<Subscriber>, StorageError>;

    fn subscribers_by_topic(
        &self,
        topic: &str,
    ) -> Result<Vec<Subscriber>, StorageError>;

    /// Removes (and returns) the subscriber stored under `channel`.
    fn delete_subscriber(
        &self,
        channel: &str,
    ) -> Result<Option<Subscriber>, StorageError>;
}
