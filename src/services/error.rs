//! Backend API Error Types

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request to {service} service failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} service returned {status}: {detail}")]
    Status {
        service: &'static str,
        status: u16,
        detail: String,
    },

    #[error("Unexpected response body from {service} service: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Not logged in: {operation} requires an access token")]
    MissingToken { operation: &'static str },
}

impl crate::core::error_handling::ContextualError for ApiError {
    fn is_user_actionable(&self) -> bool {
        match self {
            // The user can log in, or fix what the service rejected
            ApiError::MissingToken { .. } => true,
            ApiError::Status { status, .. } => matches!(*status, 400..=499),
            // Network and decode failures are system-level
            ApiError::Transport { .. } | ApiError::Decode { .. } => false,
        }
    }

    fn user_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => Some(detail),
            ApiError::MissingToken { .. } => Some("Log in first with 'meetmii login'"),
            _ => None,
        }
    }
}

/// Result type for backend API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error_handling::ContextualError;

    #[test]
    fn test_status_error_is_user_actionable_for_client_errors() {
        let not_found = ApiError::Status {
            service: "profile",
            status: 404,
            detail: "Profile not found".to_string(),
        };
        assert!(not_found.is_user_actionable());
        assert_eq!(not_found.user_message(), Some("Profile not found"));

        let server_error = ApiError::Status {
            service: "profile",
            status: 502,
            detail: "Bad gateway".to_string(),
        };
        assert!(!server_error.is_user_actionable());
    }

    #[test]
    fn test_missing_token_points_user_at_login() {
        let err = ApiError::MissingToken {
            operation: "profile update",
        };
        assert!(err.is_user_actionable());
        assert!(err.user_message().unwrap().contains("login"));
        assert!(err.to_string().contains("profile update"));
    }
}
