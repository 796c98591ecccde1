/// Whatever turns the schema document into an executable schema.
///
/// [`SubscriptionRegistry::subscriptions()`](crate::subscription::SubscriptionRegistry::subscriptions)
/// may run while handling a published event rather than an inbound request,
/// in which case nothing has built the schema yet. Implementations must be
/// idempotent: building an already-built schema is a no-op.
pub trait SchemaBuilder: Send + Sync {
    fn ensure_schema_built(&self);
}

impl<F> SchemaBuilder for F
where
    F: Fn() + Send + Sync,
{
    fn ensure_schema_built(&self) {
        self()
    }
}
