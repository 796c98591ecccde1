use inherent::inherent;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextSerializationError {
    #[error("Error encoding or decoding a subscriber context as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Turns a subscriber's execution context into a string that can be stored
/// alongside the [`Subscriber`](crate::subscription::Subscriber), and back.
///
/// What a context contains is up to the execution engine; here it is an
/// opaque JSON value.
pub trait ContextSerializer: Send + Sync {
    fn serialize(
        &self,
        context: &serde_json::Value,
    ) -> Result<String, ContextSerializationError>;

    fn unserialize(
        &self,
        serialized: &str,
    ) -> Result<serde_json::Value, ContextSerializationError>;
}

/// A [`ContextSerializer`] that stores contexts as JSON text.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonContextSerializer;

#[inherent]
impl ContextSerializer for JsonContextSerializer {
    pub fn serialize(
        &self,
        context: &serde_json::Value,
    ) -> Result<String, ContextSerializationError> {
        Ok(serde_json::to_string(context)?)
    }

    pub fn unserialize(
        &self,
        serialized: &str,
    ) -> Result<serde_json::Value, ContextSerializationError> {
        Ok(serde_json::from_str(serialized)?)
    }
}
