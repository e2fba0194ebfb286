use thiserror::Error;

/// Dispatch subsystem errors
///
/// Nothing in this enum ever reaches the operation that triggered a
/// dispatch cycle: content and delivery failures are contained per target
/// and per instruction, and `DuplicateDeclaration` can only occur during
/// startup registration.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Content resolution failed: {0}")]
    Content(String),

    #[error("Delivery failed: {0}")]
    Delivery(String),

    #[error("Declaration already registered for operation '{0}'")]
    DuplicateDeclaration(String),
}

/// Result type alias for the dispatch subsystem
pub type DispatchResult<T> = Result<T, DispatchError>;
