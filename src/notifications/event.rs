//! Event types for the notification system

use std::time::SystemTime;

use crate::scanner::ProfileIdentifier;

/// Outcome of one decoded camera frame.
#[derive(Clone, Debug, PartialEq)]
pub enum ScanEventType {
    /// A frame was decoded and handed to the resolver
    Detected,
    /// The frame produced a profile identifier
    Resolved,
    /// A detection arrived after the session already resolved
    Suppressed,
    /// The payload had no usable segment; the session stays open
    NoMatch,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SystemEventType {
    Startup,
    Shutdown,
}

#[derive(Clone, Debug)]
pub struct ScanEvent {
    pub event_type: ScanEventType,
    pub timestamp: SystemTime,
    pub payload: String,
}

impl ScanEvent {
    pub fn new(event_type: ScanEventType, payload: String) -> Self {
        Self {
            event_type,
            timestamp: SystemTime::now(),
            payload,
        }
    }
}

/// Navigation request for the hosting view.
///
/// Published exactly when the resolver emits an identifier; the navigation
/// host is expected to transition to a profile-view context parameterized
/// by `target`.
#[derive(Clone, Debug)]
pub struct NavigationEvent {
    pub target: ProfileIdentifier,
    pub timestamp: SystemTime,
}

impl NavigationEvent {
    pub fn profile_view(target: ProfileIdentifier) -> Self {
        Self {
            target,
            timestamp: SystemTime::now(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SystemEvent {
    pub event_type: SystemEventType,
    pub timestamp: SystemTime,
    pub message: Option<String>,
}

impl SystemEvent {
    pub fn new(event_type: SystemEventType) -> Self {
        Self {
            event_type,
            timestamp: SystemTime::now(),
            message: None,
        }
    }

    pub fn with_message(event_type: SystemEventType, message: String) -> Self {
        Self {
            event_type,
            timestamp: SystemTime::now(),
            message: Some(message),
        }
    }
}

/// Unified event enum that encompasses all event types
#[derive(Clone, Debug)]
pub enum Event {
    Scan(ScanEvent),
    Navigation(NavigationEvent),
    System(SystemEvent),
}

/// Event filtering options for subscribers
#[derive(Clone, Debug, PartialEq)]
pub enum EventFilter {
    ScanOnly,
    NavigationOnly,
    SystemOnly,
    ScanAndNavigation,
    All,
}

impl EventFilter {
    /// Check if an event should be accepted by this filter
    pub fn accepts(&self, event: &Event) -> bool {
        matches!(
            (self, event),
            (EventFilter::ScanOnly, Event::Scan(_))
                | (EventFilter::NavigationOnly, Event::Navigation(_))
                | (EventFilter::SystemOnly, Event::System(_))
                | (EventFilter::ScanAndNavigation, Event::Scan(_))
                | (EventFilter::ScanAndNavigation, Event::Navigation(_))
                | (EventFilter::All, _)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_event_type_equality() {
        assert_eq!(ScanEventType::Resolved, ScanEventType::Resolved);
        assert_ne!(ScanEventType::Resolved, ScanEventType::Suppressed);
        assert_ne!(ScanEventType::NoMatch, ScanEventType::Detected);
    }

    #[test]
    fn test_scan_event_creation() {
        let event = ScanEvent::new(
            ScanEventType::Resolved,
            "https://meetmii.com/alice".to_string(),
        );
        assert_eq!(event.event_type, ScanEventType::Resolved);
        assert_eq!(event.payload, "https://meetmii.com/alice");
    }

    #[test]
    fn test_navigation_event_carries_target() {
        let event = NavigationEvent::profile_view(ProfileIdentifier::from("alice"));
        assert_eq!(event.target.as_str(), "alice");
    }

    #[test]
    fn test_system_event_creation() {
        let startup = SystemEvent::new(SystemEventType::Startup);
        assert_eq!(startup.event_type, SystemEventType::Startup);
        assert!(startup.message.is_none());

        let shutdown = SystemEvent::with_message(
            SystemEventType::Shutdown,
            "Scan session finished".to_string(),
        );
        assert_eq!(shutdown.message, Some("Scan session finished".to_string()));
    }

    #[test]
    fn test_event_filter_accepts() {
        let scan = Event::Scan(ScanEvent::new(ScanEventType::Detected, "x".to_string()));
        let nav = Event::Navigation(NavigationEvent::profile_view(ProfileIdentifier::from(
            "alice",
        )));
        let system = Event::System(SystemEvent::new(SystemEventType::Startup));

        let scan_filter = EventFilter::ScanOnly;
        assert!(scan_filter.accepts(&scan));
        assert!(!scan_filter.accepts(&nav));
        assert!(!scan_filter.accepts(&system));

        let nav_filter = EventFilter::NavigationOnly;
        assert!(!nav_filter.accepts(&scan));
        assert!(nav_filter.accepts(&nav));
        assert!(!nav_filter.accepts(&system));

        let system_filter = EventFilter::SystemOnly;
        assert!(!system_filter.accepts(&scan));
        assert!(!system_filter.accepts(&nav));
        assert!(system_filter.accepts(&system));

        let scan_nav_filter = EventFilter::ScanAndNavigation;
        assert!(scan_nav_filter.accepts(&scan));
        assert!(scan_nav_filter.accepts(&nav));
        assert!(!scan_nav_filter.accepts(&system));

        let all_filter = EventFilter::All;
        assert!(all_filter.accepts(&scan));
        assert!(all_filter.accepts(&nav));
        assert!(all_filter.accepts(&system));
    }

    #[test]
    fn test_event_debug_formatting() {
        let event = Event::Navigation(NavigationEvent::profile_view(ProfileIdentifier::from(
            "alice",
        )));
        let debug_str = format!("{:?}", event);
        assert!(debug_str.contains("Navigation"));
        assert!(debug_str.contains("alice"));
    }
}
