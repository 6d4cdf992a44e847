//! HTTP client for the MeetMii backend services
//!
//! All business logic lives in the remote microservices; this client only
//! shapes requests, forwards the bearer token where required, and maps
//! failures into `ApiError`. There is no retry or backoff - each call is a
//! single request.

use crate::services::error::{ApiError, ApiResult};
use crate::services::types::{
    LoginRequest, LoginResponse, Profile, ProfileUpdate, RegisterRequest, ScanReport, ScanStats,
    User,
};
use serde::de::DeserializeOwned;

/// Base URLs for the four MeetMii services.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceEndpoints {
    pub user: String,
    pub profile: String,
    pub qr: String,
    pub analytics: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        // Production Cloud Run endpoints
        Self {
            user: "https://user-service-661768391098.us-central1.run.app".to_string(),
            profile: "https://profile-service-661768391098.us-central1.run.app".to_string(),
            qr: "https://qr-service-661768391098.us-central1.run.app".to_string(),
            analytics: "https://analytics-service-661768391098.us-central1.run.app".to_string(),
        }
    }
}

/// Client for the MeetMii backend.
///
/// Holds the access token obtained from `login` in memory; nothing is
/// persisted by the client itself.
pub struct ApiClient {
    http: reqwest::Client,
    endpoints: ServiceEndpoints,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(endpoints: ServiceEndpoints) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoints,
            token: None,
        }
    }

    /// Install an access token for authenticated endpoints.
    pub fn set_token<S: Into<String>>(&mut self, token: S) {
        self.token = Some(token.into());
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn endpoints(&self) -> &ServiceEndpoints {
        &self.endpoints
    }

    /// Register a new account. `POST /users/register` on the user service.
    pub async fn register(&self, email: &str, username: &str, password: &str) -> ApiResult<User> {
        let url = format!("{}/users/register", self.endpoints.user);
        let body = RegisterRequest {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                service: "user",
                source,
            })?;
        Self::decode("user", response).await
    }

    /// Log in and remember the returned access token.
    pub async fn login(&mut self, email: &str, password: &str) -> ApiResult<String> {
        let url = format!("{}/users/login", self.endpoints.user);
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                service: "user",
                source,
            })?;
        let login: LoginResponse = Self::decode("user", response).await?;
        self.token = Some(login.access_token.clone());
        Ok(login.access_token)
    }

    /// Fetch the public profile for a username. No auth required.
    pub async fn fetch_profile(&self, username: &str) -> ApiResult<Profile> {
        let url = format!("{}/profile/{}", self.endpoints.profile, username);
        let response =
            self.http
                .get(&url)
                .send()
                .await
                .map_err(|source| ApiError::Transport {
                    service: "profile",
                    source,
                })?;
        Self::decode("profile", response).await
    }

    /// Create or update the authenticated user's profile.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<Profile> {
        let token = self.token.as_deref().ok_or(ApiError::MissingToken {
            operation: "profile update",
        })?;
        let url = format!("{}/profile", self.endpoints.profile);
        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(update)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                service: "profile",
                source,
            })?;
        Self::decode("profile", response).await
    }

    /// URL of the QR code PNG for a username.
    ///
    /// The image itself is generated by the QR service; callers use this
    /// URL directly.
    pub fn qr_code_url(&self, username: &str) -> String {
        format!("{}/qr/{}", self.endpoints.qr, username)
    }

    /// Report one QR scan to the analytics service.
    pub async fn report_scan(&self, report: &ScanReport) -> ApiResult<()> {
        let url = format!("{}/analytics/scan", self.endpoints.analytics);
        let response = self
            .http
            .post(&url)
            .json(report)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                service: "analytics",
                source,
            })?;
        Self::check_status("analytics", response).await?;
        Ok(())
    }

    /// Fetch scan statistics for a username. No auth required.
    pub async fn scan_stats(&self, username: &str) -> ApiResult<ScanStats> {
        let url = format!(
            "{}/analytics/{}/stats",
            self.endpoints.analytics, username
        );
        let response =
            self.http
                .get(&url)
                .send()
                .await
                .map_err(|source| ApiError::Transport {
                    service: "analytics",
                    source,
                })?;
        Self::decode("analytics", response).await
    }

    /// Reject non-2xx responses, surfacing the FastAPI `detail` message.
    async fn check_status(
        service: &'static str,
        response: reqwest::Response,
    ) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("detail")
                .and_then(|d| d.as_str())
                .map(|d| d.to_string())
                .unwrap_or_else(|| body.to_string()),
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        Err(ApiError::Status {
            service,
            status: status.as_u16(),
            detail,
        })
    }

    async fn decode<T: DeserializeOwned>(
        service: &'static str,
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let response = Self::check_status(service, response).await?;
        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { service, source })
    }
}
