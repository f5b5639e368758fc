//! Integration test utilities for the funding campaign server
//!
//! This crate provides helpers for running end-to-end tests against the REST
//! API with in-memory stores, so the full HTTP surface can be exercised
//! without PostgreSQL or Redis.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
