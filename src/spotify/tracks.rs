use crate::{
    config,
    error::Result,
    spotify::pagination,
    types::{Playlist, PlaylistTrackItem, Track},
    utils,
};

/// Retrieves the tracks of a single playlist, in API return order.
///
/// Items without a resolvable track object or track id are skipped; missing
/// optional fields (popularity, link, cover image) get their defaults
/// instead of failing the run.
pub async fn get_playlist_tracks(playlist: &Playlist, token: &str) -> Result<Vec<Track>> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist.id
    );

    let items = pagination::paginate::<PlaylistTrackItem>(api_url, token).await?;

    Ok(items
        .into_iter()
        .filter_map(Track::from_playlist_item)
        .collect())
}

/// Aggregates the tracks of all playlists into one de-duplicated sequence.
///
/// Playlists are fetched strictly in order and their tracks concatenated,
/// then de-duplicated by track id with first-seen order preserved. Running
/// this twice over the same playlists yields an identical sequence.
pub async fn collect_tracks(playlists: &[Playlist], token: &str) -> Result<Vec<Track>> {
    let mut tracks: Vec<Track> = Vec::new();

    for playlist in playlists {
        tracks.extend(get_playlist_tracks(playlist, token).await?);
    }

    utils::dedup_tracks(&mut tracks);
    Ok(tracks)
}
