use reqwest::Client;

use crate::{config, error::Result, types::SearchResponse, utils};

/// Resolves an artist name to a Spotify id via the search endpoint.
///
/// Scans the returned items in API order and keeps the first
/// case-insensitive exact name match. Names without an exact match resolve
/// to `Ok(None)` rather than erroring; the lineup matcher drops them.
pub async fn search_artist_id(name: &str, token: &str) -> Result<Option<String>> {
    let client = Client::new();
    let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

    let response = client
        .get(&api_url)
        .query(&[("query", name), ("type", "artist"), ("locale", "en-US")])
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<SearchResponse>().await?;

    Ok(utils::match_artist_name(&res.artists.items, name).map(|artist| artist.id.clone()))
}
