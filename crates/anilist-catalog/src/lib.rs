//! AniList catalog library.
//!
//! Typed GraphQL client for the AniList metadata service: seasonal
//! listings, trending rankings, keyword search and per-title details,
//! normalized into the shared domain models.

pub mod api;
pub mod season;

pub use api::AnilistClient;
pub use season::Season;
