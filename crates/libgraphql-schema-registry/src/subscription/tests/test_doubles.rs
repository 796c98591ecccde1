use crate::subscription::GraphQLSubscription;
use crate::subscription::StorageError;
use crate::subscription::Subscriber;
use crate::subscription::SubscriptionStorage;
use parking_lot::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// Lets every subscriber through and delivers every event.
#[derive(Debug, Default)]
pub(super) struct AllowAllSubscription;
impl GraphQLSubscription for AllowAllSubscription {
    fn authorize(&self, _subscriber: &Subscriber) -> bool {
        true
    }

    fn filter(&self, _subscriber: &Subscriber, _root: &serde_json::Value) -> bool {
        true
    }
}

#[derive(Debug, Default)]
pub(super) struct CountingSchemaBuilder {
    pub(super) calls: AtomicUsize,
}
impl crate::subscription::SchemaBuilder for CountingSchemaBuilder {
    fn ensure_schema_built(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Records every `store_subscriber()` call; optionally fails all of them.
#[derive(Debug, Default)]
pub(super) struct RecordingStorage {
    pub(super) fail_with: Option<StorageError>,
    pub(super) stored: Mutex<Vec<(Subscriber, String)>>,
}
impl SubscriptionStorage for RecordingStorage {
    fn store_subscriber(
        &self,
        subscriber: &Subscriber,
        channel: &str,
    ) -> Result<(), StorageError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.stored.lock().push((subscriber.clone(), channel.to_string()));
        Ok(())
    }

    fn subscriber_by_channel(
        &self,
        channel: &str,
    ) -> Result<Option<Subscriber>, StorageError> {
        Ok(self.stored.lock()
            .iter()
            .find(|(_, stored_channel)| stored_channel == channel)
            .map(|(subscriber, _)| subscriber.clone()))
    }

    fn subscribers_by_topic(
        &self,
        _topic: &str,
    ) -> Result<Vec<Subscriber>, StorageError> {
        Ok(vec![])
    }

    fn delete_subscriber(
        &self,
        _channel: &str,
    ) -> Result<Option<Subscriber>, StorageError> {
        Ok(None)
    }
}
