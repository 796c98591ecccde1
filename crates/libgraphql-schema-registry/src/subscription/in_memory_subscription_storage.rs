use crate::subscription::StorageError;
use crate::subscription::Subscriber;
use crate::subscription::SubscriptionStorage;
use indexmap::IndexMap;
use inherent::inherent;
use parking_lot::RwLock;

/// A [`SubscriptionStorage`] that keeps subscribers in process memory.
///
/// Useful for single-process deployments and tests; subscribers stored here
/// do not outlive the process.
#[derive(Debug, Default)]
pub struct InMemorySubscriptionStorage {
    subscribers_by_channel: RwLock<IndexMap<String, Subscriber>>,
}
impl InMemorySubscriptionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.subscribers_by_channel.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers_by_channel.read().is_empty()
    }
}

#[inherent]
impl SubscriptionStorage for InMemorySubscriptionStorage {
    pub fn store_subscriber(
        &self,
        subscriber: &Subscriber,
        channel: &str,
    ) -> Result<(), StorageError> {
        let stored = subscriber.clone().with_channel(channel);
        log::trace!(
            "Storing subscriber for operation `{}` on channel `{channel}`.",
            stored.operation_name(),
        );
        self.subscribers_by_channel.write().insert(channel.to_string(), stored);
        Ok(())
    }

    pub fn subscriber_by_channel(
        &self,
        channel: &str,
    ) -> Result<Option<Subscriber>, StorageError> {
        Ok(self.subscribers_by_channel.read().get(channel).cloned())
    }

    pub fn subscribers_by_topic(
        &self,
        topic: &str,
    ) -> Result<Vec<Subscriber>, StorageError> {
        Ok(
            self.subscribers_by_channel
                .read()
                .values()
                .filter(|subscriber| subscriber.topic() == Some(topic))
                .cloned()
                .collect()
        )
    }

    pub fn delete_subscriber(
        &self,
        channel: &str,
    ) -> Result<Option<Subscriber>, StorageError> {
        Ok(self.subscribers_by_channel.write().shift_remove(channel))
    }
}
