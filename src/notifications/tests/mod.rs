//! Integration tests for the notification system
