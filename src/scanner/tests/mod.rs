//! Test modules for the scanner system
//!
//! Scenario-level tests for the scan resolution flow; unit tests live
//! alongside the types they cover.
