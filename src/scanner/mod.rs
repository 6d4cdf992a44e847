//! Scanner Component
//!
//! Turns raw decoded QR payloads from the camera into navigation requests,
//! emitting at most one profile identifier per focus period of the scanning
//! view.
//!
//! ## Core Features
//!
//! - **ScanResolver**: flag-gated state machine with `on_focus` /
//!   `on_scan_detected` as its only mutators
//! - **Duplicate Suppression**: the decoder reports a continuously visible
//!   code many times per second; the first successful parse wins
//! - **Forgiving Parsing**: an unparseable payload is a silent no-op that
//!   leaves the session open for a later, possibly valid, scan

pub mod payload;
pub mod resolver;
pub mod types;

pub use payload::extract_identifier;
pub use resolver::ScanResolver;
pub use types::{ProfileIdentifier, SessionState};

#[cfg(test)]
mod tests;
