//! Scan resolution state machine
//!
//! Converts raw decoded scan payloads into at most one navigation request
//! per focus period. The camera decoder reports the same visible code many
//! times per second, so the first successful parse wins and every later
//! detection in the same focus period is a cheap no-op.

use crate::scanner::payload::extract_identifier;
use crate::scanner::types::{ProfileIdentifier, SessionState};

/// Flag-gated resolver for one scanning view.
///
/// The session state is owned exclusively by this struct and has no
/// lifetime beyond a single focus period; `on_focus` and `on_scan_detected`
/// are its only mutators. All calls arrive from a single UI/event thread,
/// so no synchronization is needed.
#[derive(Debug)]
pub struct ScanResolver {
    state: SessionState,
}

impl ScanResolver {
    /// Create a resolver in the `Idle` state, ready to accept scans.
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    /// Host lifecycle hook: the scanning view became visible/active.
    ///
    /// Resets the session so the next valid payload resolves again.
    /// Idempotent; must be called before scans from the new visibility
    /// period are delivered.
    pub fn on_focus(&mut self) {
        if self.state == SessionState::Resolved {
            log::debug!("Scan session reset on focus");
        }
        self.state = SessionState::Idle;
    }

    /// Process one decoded frame from the camera.
    ///
    /// Returns the extracted identifier for the first successfully parsed
    /// payload of the current focus period, `None` otherwise. A payload
    /// with no usable segment leaves the session open; once a payload has
    /// resolved, every further detection is ignored regardless of content.
    pub fn on_scan_detected(&mut self, payload: &str) -> Option<ProfileIdentifier> {
        if self.state == SessionState::Resolved {
            log::trace!("Duplicate scan suppressed");
            return None;
        }

        let identifier = extract_identifier(payload)?;
        self.state = SessionState::Resolved;
        log::debug!("Scan resolved to profile '{}'", identifier);
        Some(identifier)
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }
}

impl Default for ScanResolver {
    fn default() -> Self {
        Self::new()
    }
}
