use crate::types::DbId;

/// Domain error for the cakebox core.
///
/// The price calculator and option resolver never return errors: unknown
/// slugs degrade to a zero delta / full fallback set. Everything else that
/// can reject input does so through one of these variants so the API layer
/// can map them to consistent HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Delivery date falls outside the accepted ordering window.
    #[error("Delivery date out of window: {0}")]
    OutOfWindow(String),

    /// Same-day delivery requested without the required preparation buffer.
    #[error("Insufficient lead time: {0}")]
    InsufficientLeadTime(String),

    /// Order status change that the state machine does not permit.
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// Blob storage rejected or failed an image upload.
    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
