//! # CLI Module
//!
//! User-facing command implementations. Each command coordinates the
//! Spotify client layer, the lineup and report file managers, and terminal
//! feedback (spinners, tables, the output macros).
//!
//! ## Commands
//!
//! - [`find_artists`] - Runs the full aggregation for one username: token,
//!   playlists, tracks, artist resolution, lineup filter, report. Prints a
//!   table or JSON and caches the report for later `--cached` reads.
//! - [`list_lineup`] - Shows the current lineup file as a table.
//! - [`update_lineup`] - The offline matcher: resolves each lineup name to
//!   a Spotify id via search and rewrites the lineup file, dropping names
//!   without an exact match.
//! - [`serve`] - Starts the HTTP server exposing the report endpoint.
//!
//! Errors surface through the output macros; an aggregation run is
//! all-or-nothing and a failed run prints nothing but the error.

mod artists;
mod lineup;
mod serve;

pub use artists::find_artists;
pub use lineup::list_lineup;
pub use lineup::update_lineup;
pub use serve::serve;
