//! Aggregation of resolved artists into the final report.
//!
//! The transformations here are pure; the only I/O lives in [`gather`],
//! which runs the full pipeline (token, playlists, tracks, resolution)
//! and is shared by the CLI and the HTTP endpoint. A run is all-or-nothing:
//! any failure aborts it and no partial report is produced.

use std::collections::HashSet;

use crate::{
    error::Result,
    spotify,
    types::{Artist, ArtistReport, Playlist, Report},
};

/// Builds the report from resolved artists and the scanned playlists.
///
/// Artists without any attached track are dropped; the rest are mapped to
/// their report shape in resolution order, together with the names of every
/// playlist that was scanned.
pub fn build_report(username: &str, artists: &[Artist], playlists: &[Playlist]) -> Report {
    Report {
        username: username.to_string(),
        artists: artists
            .iter()
            .filter(|artist| !artist.tracks.is_empty())
            .map(ArtistReport::from)
            .collect(),
        playlists: playlists.iter().map(|playlist| playlist.name.clone()).collect(),
    }
}

/// Keeps only artists whose id appears in the lineup id set.
///
/// Applied after full resolution, so the unfiltered artist set is available
/// up to this point and the filter is a plain id-membership check.
pub fn filter_by_lineup(artists: Vec<Artist>, lineup_ids: &HashSet<String>) -> Vec<Artist> {
    artists
        .into_iter()
        .filter(|artist| lineup_ids.contains(&artist.id))
        .collect()
}

/// Runs a complete aggregation for one user.
///
/// Requests a fresh token, collects all playlists, aggregates and
/// de-duplicates their tracks, resolves the referenced artists, optionally
/// filters them against a lineup, and builds the report.
pub async fn gather(username: &str, lineup_ids: Option<&HashSet<String>>) -> Result<Report> {
    let token = spotify::auth::request_token().await?;

    let playlists = spotify::playlists::get_user_playlists(username, &token.access_token).await?;
    let tracks = spotify::tracks::collect_tracks(&playlists, &token.access_token).await?;
    let mut artists = spotify::artists::resolve_artists(&tracks, &token.access_token).await?;

    if let Some(ids) = lineup_ids {
        artists = filter_by_lineup(artists, ids);
    }

    Ok(build_report(username, &artists, &playlists))
}
