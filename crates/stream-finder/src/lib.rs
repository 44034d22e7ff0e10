//! Stream finder library: locate anime episodes and stream sources across
//! interchangeable streaming-metadata mirrors.
//!
//! The mirror service is best-effort; this crate wraps it in an endpoint
//! rotator so a partial outage degrades to the next mirror instead of a
//! failed request.

pub mod api;
pub mod links;

pub use api::{AttemptError, EndpointHealth, EndpointRotator, MirrorClient, MirrorError};
pub use links::{streaming_options, StreamingOption};
