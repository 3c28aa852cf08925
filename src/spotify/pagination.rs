use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    error::{Error, Result},
    types::Page,
};

/// Walks a cursor-paginated collection endpoint until it is exhausted.
///
/// Repeatedly issues a GET with bearer authorization, decodes the page's
/// `items` into `T`, and follows the `next` cursor URL until it is null,
/// returning the concatenated item sequence. The accumulator is created
/// fresh on every call and never shared between invocations. An endpoint
/// returning an empty final page terminates normally.
///
/// # Arguments
///
/// * `start_url` - URL of the first page
/// * `token` - Valid access token for API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<T>)` - Items of all pages, in API return order
/// - `Err(Error::Fetch)` - A page body that is not decodable JSON or is
///   missing the expected `items` structure
/// - `Err(Error::Http)` - Network failure or non-success status
pub async fn paginate<T: DeserializeOwned>(start_url: String, token: &str) -> Result<Vec<T>> {
    let client = Client::new();
    let mut items: Vec<T> = Vec::new();
    let mut next_url = Some(start_url);

    while let Some(url) = next_url.take() {
        let response = client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let page: Page<T> = serde_json::from_str(&body).map_err(|e| Error::Fetch {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        items.extend(page.items);
        next_url = page.next;
    }

    Ok(items)
}
