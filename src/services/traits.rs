//! Collaborator traits for the backend services
//!
//! The scan flow only needs two things from the backend: resolving an
//! identifier to a profile and recording that the scan happened. This seam
//! keeps the flow testable without a network.

use crate::services::error::ApiResult;
use crate::services::types::{Profile, ScanReport};
use async_trait::async_trait;

/// Downstream profile-lookup collaborator for resolved scan identifiers.
///
/// No validation happens before the lookup; unknown or malformed
/// identifiers are rejected by the implementation (a 404 from the profile
/// service in production).
#[async_trait]
pub trait ProfileDirectory {
    async fn lookup_profile(&self, username: &str) -> ApiResult<Profile>;

    async fn record_scan(&self, report: &ScanReport) -> ApiResult<()>;
}

#[async_trait]
impl ProfileDirectory for crate::services::client::ApiClient {
    async fn lookup_profile(&self, username: &str) -> ApiResult<Profile> {
        self.fetch_profile(username).await
    }

    async fn record_scan(&self, report: &ScanReport) -> ApiResult<()> {
        self.report_scan(report).await
    }
}
