use axum::{Form, Json, http::StatusCode};
use serde::Deserialize;

use crate::{error::Error, management::LineupManager, report, types::Report, warning};

#[derive(Debug, Deserialize)]
pub struct FindArtistsForm {
    pub username: String,
}

pub async fn find_artists(
    Form(form): Form<FindArtistsForm>,
) -> Result<Json<Report>, (StatusCode, String)> {
    // A missing lineup file means nothing to match against, so the full
    // library report is returned instead of an error.
    let lineup_ids = match LineupManager::load().await {
        Ok(mgr) => Some(mgr.ids()),
        Err(_) => None,
    };

    match report::gather(&form.username, lineup_ids.as_ref()).await {
        Ok(report) => Ok(Json(report)),
        Err(Error::UserNotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            "could not find that user".to_string(),
        )),
        Err(e) => {
            warning!("Aggregation for {} failed: {}", form.username, e);
            Err((
                StatusCode::BAD_GATEWAY,
                "service temporarily unavailable".to_string(),
            ))
        }
    }
}
