//! Generic error handling utilities
//!
//! Provides unified error handling that can work across different error
//! types while maintaining domain-specific error logging patterns.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// User-actionable errors (validation failures, a missing login, a 404 from
/// the profile service) should show specific messages; system errors
/// (network failures, decode errors) show generic context with debug
/// details.
///
/// When `is_user_actionable()` returns `true`, `user_message()` should
/// return `Some(message)`; when it returns `false`, `user_message()` should
/// return `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error contains a specific, user-actionable
    /// message that should be displayed directly to the user
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<&str>;
}

/// Log errors with appropriate detail level based on error specificity
///
/// Shows the specific message for user-actionable errors and the operation
/// context for system errors; full detail goes to the debug level either
/// way.
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    if error.is_user_actionable() {
        if let Some(user_msg) = error.user_message() {
            log::error!("FATAL: {}", user_msg);
        } else {
            log::error!("FATAL: {}", operation_context);
        }
    } else {
        log::error!("FATAL: {}", operation_context);
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
