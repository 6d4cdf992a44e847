//! Scan payload parsing
//!
//! A decoded QR payload is treated as a URL-like path string with no fixed
//! schema. The profile identifier is the last non-empty `/`-delimited
//! segment, so both `https://meetmii.com/alice` and
//! `https://meetmii.com/alice/` yield `alice`. Parsing never fails with an
//! error: a payload with no usable segment is simply not a match.

use crate::scanner::types::ProfileIdentifier;

/// Extract the profile identifier from a raw decoded payload.
///
/// Returns `None` when the payload is empty or consists only of slashes.
pub fn extract_identifier(payload: &str) -> Option<ProfileIdentifier> {
    payload
        .split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .map(ProfileIdentifier::from)
}
