//! Wire types for the MeetMii backend services
//!
//! These mirror the JSON bodies the remote services accept and return. The
//! services own the shapes; the client only serializes and deserializes
//! them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account returned by the user service after registration.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response; the token is a JWT access token string.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Public profile as served by the profile service.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub instagram: Option<String>,
    pub snapchat: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub tiktok: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub is_professional_mode: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create-or-update body for the authenticated user's profile.
///
/// All fields are optional so callers only send what they want to set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapchat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_professional_mode: Option<bool>,
}

/// Body for reporting a single QR scan to the analytics service.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

impl ScanReport {
    pub fn new<S: Into<String>>(username: S) -> Self {
        Self {
            username: username.into(),
            ip_address: None,
        }
    }
}

/// Aggregated scan counts for a username.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanStats {
    pub username: String,
    pub total_scans: i64,
    pub scans_this_week: i64,
    pub scans_this_month: i64,
}
