//! Request/response logging hook.

use std::error::Error;

/// Receives the verb, URL, and full request/response bodies of every call.
///
/// Implementations must not alter what they are given and must not panic;
/// the client never acts on anything a logger does.
pub trait RequestLogger: Send + Sync {
    /// Log a message.
    fn log(&self, message: &str);

    /// Log a message along with the error that caused it.
    fn log_error(&self, message: &str, cause: &dyn Error);
}

/// The default logger. Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpLogger;

impl RequestLogger for NoOpLogger {
    fn log(&self, _message: &str) {}

    fn log_error(&self, _message: &str, _cause: &dyn Error) {}
}

/// Forwards messages to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl RequestLogger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::debug!(target: "wordnik", "{message}");
    }

    fn log_error(&self, message: &str, cause: &dyn Error) {
        tracing::debug!(target: "wordnik", "{message}: {cause}");
    }
}
