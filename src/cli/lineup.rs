use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    management::LineupManager,
    spotify, success,
    types::{LineupArtist, LineupTableRow},
    warning,
};

pub async fn list_lineup() {
    match LineupManager::load().await {
        Ok(mgr) => {
            let table_rows: Vec<LineupTableRow> = mgr
                .artists()
                .iter()
                .map(|a| LineupTableRow {
                    name: a.name.clone(),
                    spotify_id: a.spotify_id.clone().unwrap_or_else(|| "-".to_string()),
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(e) => warning!("Failed to load lineup. Err: {}", e),
    }
}

pub async fn update_lineup() {
    let mgr = match LineupManager::load().await {
        Ok(mgr) => mgr,
        Err(e) => {
            error!(
                "Failed to load lineup. Seed {} with {{\"lineup\": [\"Artist Name\", ...]}}\n Error: {}",
                LineupManager::lineup_path().display(),
                e
            );
        }
    };

    let token = match spotify::auth::request_token().await {
        Ok(token) => token,
        Err(e) => error!("Failed to authorize with Spotify: {}", e),
    };

    let names = mgr.names();
    let pb = ProgressBar::new(names.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40.blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut resolved: Vec<LineupArtist> = Vec::new();
    for name in &names {
        pb.set_message(name.clone());

        match spotify::search::search_artist_id(name, &token.access_token).await {
            Ok(Some(id)) => resolved.push(LineupArtist {
                name: name.clone(),
                spotify_id: Some(id),
            }),
            Ok(None) => {
                pb.suspend(|| warning!("No exact match for {}, dropping from lineup", name))
            }
            Err(e) => pb.suspend(|| warning!("Search for {} failed, dropping: {}", name, e)),
        }

        pb.inc(1);
    }
    pb.finish_and_clear();

    let resolved_count = resolved.len();
    let updated = LineupManager::new(resolved);
    if let Err(e) = updated.persist().await {
        error!("Failed to write lineup file: {}", e);
    }

    success!("Resolved {}/{} lineup artists", resolved_count, names.len());
}
