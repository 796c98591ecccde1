use crate::subscription::StorageError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SubscriptionRegistryError {
    #[error("Failed to store subscriber: {0}")]
    StorageError(#[from] StorageError),

    #[error("Syntax error in subscription query: {0}")]
    SyntaxError(String),
}
