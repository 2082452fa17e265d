//! Port definitions (hexagonal architecture interfaces)
//!
//! Ports are interfaces that the collectors depend on, but whose
//! implementations live in adapter code.
//!
//! ## Ports Overview
//!
//! - [`IEventSink`] - Delivery of telemetry events to the analytics layer

pub mod event_sink;

pub use event_sink::IEventSink;
