//! AsyncNotificationManager implementation

use crate::notifications::error::NotificationError;
use crate::notifications::event::{Event, EventFilter};
use std::collections::HashMap;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Receiver half handed to a subscriber on registration.
pub type EventReceiver = UnboundedReceiver<Event>;

struct SubscriberInfo {
    filter: EventFilter,
    source: String,
    sender: UnboundedSender<Event>,
}

pub struct AsyncNotificationManager {
    subscribers: HashMap<String, SubscriberInfo>,
}

impl AsyncNotificationManager {
    pub fn new() -> Self {
        Self {
            subscribers: HashMap::new(),
        }
    }

    /// Register a subscriber and return its event receiver.
    ///
    /// Re-subscribing with an existing id replaces the old subscription;
    /// the previous receiver sees its channel close.
    pub fn subscribe(
        &mut self,
        subscriber_id: String,
        filter: EventFilter,
        source: String,
    ) -> EventReceiver {
        let (sender, receiver) = unbounded_channel();

        let subscriber_info = SubscriberInfo {
            filter,
            source: source.clone(),
            sender,
        };

        if let Some(existing) = self.subscribers.insert(subscriber_id.clone(), subscriber_info) {
            log::warn!(
                "Subscriber '{}' replaced existing subscription (source: {} -> {})",
                subscriber_id,
                existing.source,
                source
            );
        }

        receiver
    }

    /// Remove a subscriber. Returns true if it existed.
    pub fn unsubscribe(&mut self, subscriber_id: &str) -> bool {
        self.subscribers.remove(subscriber_id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn has_subscriber(&self, subscriber_id: &str) -> bool {
        self.subscribers.contains_key(subscriber_id)
    }

    /// Publish an event to every subscriber whose filter accepts it.
    ///
    /// Subscribers whose channel has closed are dropped from the registry
    /// and reported in the error; delivery to the remaining subscribers is
    /// not affected.
    pub fn publish(&mut self, event: Event) -> Result<(), NotificationError> {
        let event_type = match &event {
            Event::Scan(_) => "Scan",
            Event::Navigation(_) => "Navigation",
            Event::System(_) => "System",
        };

        let mut failed_subscribers = Vec::new();

        for (id, info) in &self.subscribers {
            if !info.filter.accepts(&event) {
                continue;
            }
            if info.sender.send(event.clone()).is_err() {
                log::debug!("Dropping subscriber '{}': channel closed", id);
                failed_subscribers.push(id.clone());
            }
        }

        for id in &failed_subscribers {
            self.subscribers.remove(id);
        }

        if failed_subscribers.is_empty() {
            Ok(())
        } else {
            Err(NotificationError::PublishFailed {
                event_type: event_type.to_string(),
                failed_subscribers,
            })
        }
    }
}

impl Default for AsyncNotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::event::{SystemEvent, SystemEventType};

    fn system_event() -> Event {
        Event::System(SystemEvent::new(SystemEventType::Startup))
    }

    #[tokio::test]
    async fn test_subscribe_and_publish() {
        let mut manager = AsyncNotificationManager::new();
        let mut receiver = manager.subscribe(
            "host".to_string(),
            EventFilter::All,
            "unit-test".to_string(),
        );

        manager.publish(system_event()).unwrap();

        let received = receiver.recv().await.expect("event should be delivered");
        assert!(matches!(received, Event::System(_)));
    }

    #[tokio::test]
    async fn test_filter_excludes_events() {
        let mut manager = AsyncNotificationManager::new();
        let mut receiver = manager.subscribe(
            "nav-host".to_string(),
            EventFilter::NavigationOnly,
            "unit-test".to_string(),
        );

        manager.publish(system_event()).unwrap();
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_closed_channel_is_pruned_on_publish() {
        let mut manager = AsyncNotificationManager::new();
        let receiver = manager.subscribe(
            "gone".to_string(),
            EventFilter::All,
            "unit-test".to_string(),
        );
        drop(receiver);

        let err = manager.publish(system_event()).unwrap_err();
        match err {
            NotificationError::PublishFailed {
                failed_subscribers, ..
            } => assert_eq!(failed_subscribers, vec!["gone".to_string()]),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(manager.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_unsubscribe() {
        let mut manager = AsyncNotificationManager::new();
        let _receiver = manager.subscribe(
            "host".to_string(),
            EventFilter::All,
            "unit-test".to_string(),
        );
        assert!(manager.has_subscriber("host"));
        assert!(manager.unsubscribe("host"));
        assert!(!manager.has_subscriber("host"));
        assert!(!manager.unsubscribe("host"));
    }

    #[tokio::test]
    async fn test_resubscribe_replaces_previous_subscription() {
        let mut manager = AsyncNotificationManager::new();
        let _old = manager.subscribe(
            "host".to_string(),
            EventFilter::SystemOnly,
            "first".to_string(),
        );
        let mut new = manager.subscribe(
            "host".to_string(),
            EventFilter::All,
            "second".to_string(),
        );
        assert_eq!(manager.subscriber_count(), 1);

        manager.publish(system_event()).unwrap();
        assert!(new.recv().await.is_some());
    }
}
