use thiserror::Error;

/// Result type for all client operations.
pub type Result<T> = std::result::Result<T, WordnikError>;

/// Errors returned by the client.
///
/// The service reports every failure the same way, so within each variant the
/// message text is the only discriminator callers get.
#[derive(Debug, Error)]
pub enum WordnikError {
    /// A required argument was missing or empty. Raised before any network
    /// traffic happens.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Network failure, timeout, or a non-success HTTP status.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be parsed, or a decode routine failed.
    #[error("decode error: {0}")]
    Decode(String),
}

impl WordnikError {
    /// Failure at a decode routine boundary. Reports the routine name and
    /// whether a document was present, never the field that failed.
    pub(crate) fn decode_routine(routine: &str, document_present: bool) -> Self {
        let doc = if document_present {
            "present"
        } else {
            "missing"
        };
        WordnikError::Decode(format!(
            "error in decode routine '{routine}': XML document was {doc}"
        ))
    }
}
