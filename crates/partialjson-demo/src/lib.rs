//! # partialjson Demo Library
//!
//! This library exposes the demo's record type and scenarios for integration testing.

pub mod model;
pub mod scenarios;
