//! # Spotify Integration Module
//!
//! This module is the integration layer between the lineup matcher and the
//! Spotify Web API. It handles the token exchange, paginated collection
//! endpoints, the batch artist lookup, and the artist search used by the
//! offline lineup matcher.
//!
//! ## Core Modules
//!
//! - [`auth`] - Client-credentials token exchange. A fresh token is
//!   requested per logical operation; nothing is cached.
//! - [`pagination`] - Generic walk of a cursor-paginated endpoint, following
//!   the `next` URL until it is null.
//! - [`playlists`] - All playlists owned by a user, in API return order.
//! - [`tracks`] - Tracks of each playlist, aggregated and de-duplicated by
//!   track id across the whole playlist library.
//! - [`artists`] - Batch artist lookup (at most 50 ids per request) and the
//!   join of resolved artists back onto the tracks referencing them.
//! - [`search`] - Artist search with case-insensitive exact-name matching,
//!   used to resolve lineup names to Spotify ids.
//!
//! ## Request Model
//!
//! All calls are async but strictly sequential: every page fetch and every
//! batch fetch is awaited in order. There are no retries and no rate-limit
//! handling; a failed request aborts the surrounding run and surfaces as one
//! of the variants in [`crate::error::Error`].
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token exchange
//! - `GET /users/{user_id}/playlists` - paginated playlists
//! - `GET /playlists/{playlist_id}/tracks` - paginated playlist tracks
//! - `GET /artists?ids=...` - batch artist lookup
//! - `GET /search?type=artist` - artist search

pub mod artists;
pub mod auth;
pub mod pagination;
pub mod playlists;
pub mod search;
pub mod tracks;
