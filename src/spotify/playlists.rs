use reqwest::StatusCode;

use crate::{
    config,
    error::{Error, Result},
    spotify::pagination,
    types::Playlist,
};

/// Retrieves all playlists owned by a user, in API return order.
///
/// Walks the user's paginated playlists endpoint to exhaustion. An unknown
/// user id is reported as `Error::UserNotFound` and surfaced to the caller
/// without retrying.
///
/// # Arguments
///
/// * `user_id` - Spotify user id whose playlist library is scanned
/// * `token` - Valid access token for API authentication
pub async fn get_user_playlists(user_id: &str, token: &str) -> Result<Vec<Playlist>> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );

    match pagination::paginate::<Playlist>(api_url, token).await {
        Ok(playlists) => Ok(playlists),
        Err(Error::Http(err)) if err.status() == Some(StatusCode::NOT_FOUND) => {
            Err(Error::UserNotFound(user_id.to_string()))
        }
        Err(err) => Err(err),
    }
}
