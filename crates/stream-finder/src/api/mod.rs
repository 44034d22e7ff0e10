//! Client for the Consumet-shaped streaming-metadata mirrors.
//!
//! This module provides the endpoint rotator and the typed client built on
//! top of it, for searching titles, listing episodes and resolving stream
//! sources.

pub mod client;
pub mod rotator;
pub mod types;

pub use client::{EndpointHealth, MirrorClient};
pub use rotator::{AttemptError, EndpointRotator, MirrorError};
