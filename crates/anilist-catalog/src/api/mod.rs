//! AniList GraphQL API client implementation.
//!
//! One POST endpoint, several fixed query documents; responses come back
//! as a `{data, errors}` envelope.

pub mod client;
pub mod queries;
pub mod types;

pub use client::AnilistClient;
