use reqwest::Client;

use crate::{
    config,
    error::{Error, Result},
    types::{Artist, SeveralArtistsResponse, Track},
    utils,
};

/// Retrieves artist records for a list of ids via the batch lookup endpoint.
///
/// Ids are partitioned into consecutive batches of at most
/// [`utils::MAX_ARTIST_IDS_PER_REQUEST`] and fetched with one request per
/// batch, strictly in order. Null entries in a response (ids the endpoint no
/// longer knows) are skipped.
///
/// # Errors
///
/// Any batch failure (network, status, or decoding) aborts the whole lookup
/// with `Error::ArtistFetch`; there is no partial-result fallback.
pub async fn get_several_artists(artist_ids: &[String], token: &str) -> Result<Vec<Artist>> {
    let client = Client::new();
    let mut artists: Vec<Artist> = Vec::new();

    for id_args in utils::batch_ids(artist_ids) {
        let api_url = format!(
            "{uri}/artists?ids={ids}",
            uri = &config::spotify_apiurl(),
            ids = id_args
        );

        let response = client
            .get(&api_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| Error::ArtistFetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::ArtistFetch(e.to_string()))?;

        let json = response
            .json::<SeveralArtistsResponse>()
            .await
            .map_err(|e| Error::ArtistFetch(e.to_string()))?;

        artists.extend(json.artists.into_iter().flatten().map(Artist::from));
    }

    Ok(artists)
}

/// Resolves every artist referenced by a de-duplicated track sequence and
/// attaches the referencing tracks.
///
/// Artist ids are collected in first-seen track-scan order, batch-fetched,
/// and each resolved artist gets every track whose artist-id list contains
/// its id, in track scan order. An artist's track list stays empty when the
/// batch endpoint omitted its id.
pub async fn resolve_artists(tracks: &[Track], token: &str) -> Result<Vec<Artist>> {
    let artist_ids = utils::unique_artist_ids(tracks);
    let mut artists = get_several_artists(&artist_ids, token).await?;

    utils::attach_tracks(&mut artists, tracks);
    Ok(artists)
}
