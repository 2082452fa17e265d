//! buildscope Core - Domain types for post-build telemetry
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `ViewportState`, `ViewportSnapshot`, `CapabilitySet`, `TelemetryEvent`
//! - **Build settings** - `BuildTarget`, `BuildSystem`, `BuildVariant`, `PostBuildContext`
//! - **Port definitions** - `IEventSink`, implemented by event adapters
//! - **Configuration** - YAML-backed `Config` with validation
//!
//! # Architecture
//!
//! The domain module contains plain data types with no I/O.
//! Ports define trait interfaces that adapter crates implement.
//! The collectors themselves live in `buildscope-telemetry`.

pub mod config;
pub mod domain;
pub mod ports;
