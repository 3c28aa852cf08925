use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{
    config,
    error::{Error, Result},
    types::Token,
};

/// Exchanges the configured client credentials for a bearer token.
///
/// Issues a client-credentials grant against the token endpoint. The token
/// is not cached anywhere; callers request a fresh one per logical operation
/// and thread it through explicitly.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Access token with its type and expiry metadata
/// - `Err(Error::Auth)` - Missing secret, non-success status, undecodable
///   body, or a response without the `access_token` field
///
/// # Example
///
/// ```
/// let token = request_token().await?;
/// let playlists = get_user_playlists("some-user", &token.access_token).await?;
/// ```
pub async fn request_token() -> Result<Token> {
    let client_id = config::spotify_client_id();
    let client_secret = config::spotify_client_secret().await.map_err(Error::Auth)?;

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", &client_id),
            ("client_secret", &client_secret),
        ])
        .send()
        .await
        .map_err(|e| Error::Auth(e.to_string()))?;

    if !res.status().is_success() {
        return Err(Error::Auth(format!(
            "token endpoint returned {}",
            res.status()
        )));
    }

    let json: Value = res.json().await.map_err(|e| Error::Auth(e.to_string()))?;

    let access_token = json["access_token"]
        .as_str()
        .ok_or_else(|| Error::Auth("token response is missing access_token".to_string()))?
        .to_string();

    Ok(Token {
        access_token,
        token_type: json["token_type"].as_str().unwrap_or("Bearer").to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
