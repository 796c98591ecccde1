use crate::subscription::Subscriber;
use inherent::inherent;

/// The handler behind one subscription root field.
///
/// A handler decides who may subscribe, which published events reach which
/// subscriber, and what the event payload looks like once delivered. Event
/// payloads are opaque JSON values as far as this crate is concerned.
pub trait GraphQLSubscription: std::fmt::Debug + Send + Sync {
    /// Whether `subscriber` is allowed to subscribe to this field at all.
    fn authorize(&self, subscriber: &Subscriber) -> bool;

    /// Whether the published event `root` should be delivered to
    /// `subscriber`.
    fn filter(&self, subscriber: &Subscriber, root: &serde_json::Value) -> bool;

    /// Transforms a published event before it is delivered.
    fn resolve(
        &self,
        root: serde_json::Value,
        _subscriber: &Subscriber,
    ) -> serde_json::Value {
        root
    }

    /// The topic a subscriber to `field_name` listens on.
    fn encode_topic(&self, _subscriber: &Subscriber, field_name: &str) -> String {
        default_topic(field_name)
    }

    /// The topic a published event for `field_name` is broadcast to.
    fn decode_topic(&self, field_name: &str, _root: &serde_json::Value) -> String {
        default_topic(field_name)
    }

    /// `true` only for [`NotFoundSubscription`].
    fn is_not_found(&self) -> bool {
        false
    }
}

/// Stand-in handler for a subscription field nobody registered.
///
/// Resolution hands this back instead of failing so the caller gets to
/// decide whether an unknown field is dropped or reported. It authorizes
/// nobody and lets no event through.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NotFoundSubscription;

#[inherent]
impl GraphQLSubscription for NotFoundSubscription {
    pub fn authorize(&self, _subscriber: &Subscriber) -> bool {
        false
    }

    pub fn filter(
        &self,
        _subscriber: &Subscriber,
        _root: &serde_json::Value,
    ) -> bool {
        false
    }

    pub fn is_not_found(&self) -> bool {
        true
    }
}

/// `"onPostUpdated"` -> `"ON_POST_UPDATED"`
pub(crate) fn default_topic(field_name: &str) -> String {
    let mut topic = String::with_capacity(field_name.len() + 4);
    let mut prev_is_lower_or_digit = false;
    for ch in field_name.chars() {
        if ch.is_uppercase() && prev_is_lower_or_digit {
            topic.push('_');
        }
        prev_is_lower_or_digit = ch.is_lowercase() || ch.is_ascii_digit();
        topic.extend(ch.to_uppercase());
    }
    topic
}
