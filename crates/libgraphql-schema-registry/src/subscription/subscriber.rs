/// One client's active subscription.
///
/// A [`Subscriber`] records the operation the client sent (so the
/// subscription fields it selects can be resolved again whenever an event
/// arrives) along with the channel events for it are delivered on. An empty
/// channel means the subscriber has no dedicated channel.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Subscriber {
    pub(crate) channel: String,
    pub(crate) context: Option<String>,
    pub(crate) operation_name: String,
    pub(crate) query_string: String,
    pub(crate) topic: Option<String>,
}
impl Subscriber {
    pub fn new(
        operation_name: impl Into<String>,
        query_string: impl Into<String>,
    ) -> Self {
        Self {
            channel: String::new(),
            context: None,
            operation_name: operation_name.into(),
            query_string: query_string.into(),
            topic: None,
        }
    }

    pub fn channel(&self) -> &str {
        self.channel.as_str()
    }

    /// The subscriber's execution context as produced by a
    /// [`ContextSerializer`](crate::subscription::ContextSerializer), if one
    /// was captured.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn has_channel(&self) -> bool {
        !self.channel.is_empty()
    }

    pub fn operation_name(&self) -> &str {
        self.operation_name.as_str()
    }

    pub fn query_string(&self) -> &str {
        self.query_string.as_str()
    }

    /// The broadcast topic this subscriber listens on, as produced by
    /// [`GraphQLSubscription::encode_topic()`](crate::subscription::GraphQLSubscription::encode_topic).
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }
}
