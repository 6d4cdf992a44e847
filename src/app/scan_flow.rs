//! Scan session flow
//!
//! Wires the ScanResolver between its collaborators: decoded payloads in
//! (camera stand-in), notification events out, and the profile directory
//! as the downstream lookup for the resolved identifier.

use crate::notifications::api::{
    get_notification_service, Event, NavigationEvent, ScanEvent, ScanEventType,
};
use crate::scanner::{ProfileIdentifier, ScanResolver, SessionState};
use crate::services::error::ApiResult;
use crate::services::types::{Profile, ScanReport};
use crate::services::ProfileDirectory;

/// Result of feeding one batch of decoded payloads through a session.
#[derive(Debug)]
pub struct ScanSessionOutcome {
    /// Identifier emitted by the session, if any frame resolved
    pub resolved: Option<ProfileIdentifier>,
    /// Total frames processed
    pub frames: usize,
    /// Frames ignored because the session had already resolved
    pub suppressed: usize,
}

/// Run one focus period of the scanning view over the given payloads.
///
/// Each payload is treated as one decoded camera frame, in order. Scan
/// events are published per frame and a navigation event is published for
/// the (at most one) resolution.
pub async fn run_scan_session(payloads: &[String]) -> ScanSessionOutcome {
    let mut resolver = ScanResolver::new();
    resolver.on_focus();

    let mut outcome = ScanSessionOutcome {
        resolved: None,
        frames: 0,
        suppressed: 0,
    };

    for payload in payloads {
        outcome.frames += 1;
        let was_resolved = resolver.state() == SessionState::Resolved;

        let mut manager = get_notification_service().await;
        if let Err(e) = manager.publish(Event::Scan(ScanEvent::new(
            ScanEventType::Detected,
            payload.clone(),
        ))) {
            log::warn!("Scan event delivery incomplete: {e}");
        }

        match resolver.on_scan_detected(payload) {
            Some(identifier) => {
                let _ = manager.publish(Event::Scan(ScanEvent::new(
                    ScanEventType::Resolved,
                    payload.clone(),
                )));
                let _ = manager.publish(Event::Navigation(NavigationEvent::profile_view(
                    identifier.clone(),
                )));
                outcome.resolved = Some(identifier);
            }
            None if was_resolved => {
                outcome.suppressed += 1;
                let _ = manager.publish(Event::Scan(ScanEvent::new(
                    ScanEventType::Suppressed,
                    payload.clone(),
                )));
            }
            None => {
                let _ = manager.publish(Event::Scan(ScanEvent::new(
                    ScanEventType::NoMatch,
                    payload.clone(),
                )));
            }
        }
    }

    outcome
}

/// Act as the downstream collaborator for a resolved identifier: look up
/// the profile and record the scan.
///
/// A failed scan report does not fail the lookup - viewing the profile is
/// the user-visible outcome, the analytics write is best effort.
pub async fn resolve_profile<D: ProfileDirectory + Sync>(
    directory: &D,
    identifier: &ProfileIdentifier,
) -> ApiResult<Profile> {
    let profile = directory.lookup_profile(identifier.as_str()).await?;

    let report = ScanReport::new(identifier.as_str());
    if let Err(e) = directory.record_scan(&report).await {
        log::warn!("Could not record scan for '{identifier}': {e}");
    }

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::error::ApiError;
    use async_trait::async_trait;
    use serial_test::serial;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeDirectory {
        known: Vec<&'static str>,
        scans_recorded: AtomicUsize,
    }

    impl FakeDirectory {
        fn new(known: Vec<&'static str>) -> Self {
            Self {
                known,
                scans_recorded: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ProfileDirectory for FakeDirectory {
        async fn lookup_profile(&self, username: &str) -> ApiResult<Profile> {
            if !self.known.contains(&username) {
                return Err(ApiError::Status {
                    service: "profile",
                    status: 404,
                    detail: "Profile not found".to_string(),
                });
            }
            Ok(serde_json::from_value(serde_json::json!({
                "id": 1,
                "user_id": 1,
                "username": username,
                "display_name": null,
                "bio": null,
                "instagram": null,
                "snapchat": null,
                "linkedin": null,
                "twitter": null,
                "tiktok": null,
                "email": null,
                "website": null,
                "is_professional_mode": false,
                "created_at": "2025-01-05T10:00:00Z",
                "updated_at": "2025-01-05T10:00:00Z"
            }))
            .expect("valid profile json"))
        }

        async fn record_scan(&self, _report: &ScanReport) -> ApiResult<()> {
            self.scans_recorded.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_session_resolves_first_valid_payload_only() {
        let payloads = vec![
            "///".to_string(),
            "https://meetmii.com/alice".to_string(),
            "https://meetmii.com/bob".to_string(),
        ];
        let outcome = run_scan_session(&payloads).await;
        assert_eq!(outcome.resolved, Some(ProfileIdentifier::from("alice")));
        assert_eq!(outcome.frames, 3);
        assert_eq!(outcome.suppressed, 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_session_with_no_usable_payload() {
        let payloads = vec!["".to_string(), "//".to_string()];
        let outcome = run_scan_session(&payloads).await;
        assert_eq!(outcome.resolved, None);
        assert_eq!(outcome.suppressed, 0);
    }

    #[tokio::test]
    async fn test_resolve_profile_records_scan() {
        let directory = FakeDirectory::new(vec!["alice"]);
        let profile = resolve_profile(&directory, &ProfileIdentifier::from("alice"))
            .await
            .unwrap();
        assert_eq!(profile.username, "alice");
        assert_eq!(directory.scans_recorded.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_resolve_profile_surfaces_unknown_identifier() {
        // Arbitrary QR content reaches the lookup unvalidated and is
        // rejected there, not in the resolver.
        let directory = FakeDirectory::new(vec![]);
        let err = resolve_profile(&directory, &ProfileIdentifier::from("page"))
            .await
            .unwrap_err();
        match err {
            ApiError::Status { status, .. } => assert_eq!(status, 404),
            other => panic!("expected status error, got {other}"),
        }
        assert_eq!(directory.scans_recorded.load(Ordering::SeqCst), 0);
    }
}
