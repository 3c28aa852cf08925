//! # API Module
//!
//! HTTP endpoints served by the report server.
//!
//! ## Endpoints
//!
//! - [`find_artists`] - Accepts a form-encoded Spotify username, runs the
//!   aggregation against the user's playlist library, filters the result
//!   against the festival lineup, and returns the report as JSON. Rendering
//!   the report is left to the caller; this layer speaks JSON only.
//! - [`health`] - Health check returning application status and version.
//!
//! ## Error Mapping
//!
//! An unknown username maps to `404 could not find that user`; every other
//! failure of the aggregation run maps to `502 service temporarily
//! unavailable`. No partial reports are returned.

mod find_artists;
mod health;

pub use find_artists::find_artists;
pub use health::health;
