//! Backend Service Clients
//!
//! REST wrappers for the four MeetMii microservices (user, profile, QR and
//! analytics). Authentication, profile storage, QR image generation and
//! scan aggregation all live in the remote services; this module only
//! shapes requests and responses.

pub mod client;
pub mod error;
pub mod traits;
pub mod types;

pub use client::{ApiClient, ServiceEndpoints};
pub use error::{ApiError, ApiResult};
pub use traits::ProfileDirectory;
pub use types::{Profile, ProfileUpdate, ScanReport, ScanStats, User};
