use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    error::Error,
    management::{LineupManager, ReportManager},
    report, success,
    types::{ArtistTableRow, Report},
    warning,
};

pub async fn find_artists(username: String, all: bool, json: bool, cached: bool) {
    if cached {
        match ReportManager::new(&username).load_from_cache().await {
            Ok(report) => print_report(&report, json),
            Err(e) => error!("No cached report for {}. Err: {}", username, e),
        }
        return;
    }

    let lineup_ids = if all {
        None
    } else {
        match LineupManager::load().await {
            Ok(mgr) => Some(mgr.ids()),
            Err(e) => {
                warning!("No lineup loaded, matching against the full library. Err: {}", e);
                None
            }
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Scanning playlists of {}...", username));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let report = match report::gather(&username, lineup_ids.as_ref()).await {
        Ok(report) => {
            pb.finish_and_clear();
            report
        }
        Err(Error::UserNotFound(user)) => {
            pb.finish_and_clear();
            error!("Could not find user {}", user);
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Aggregation failed: {}", e);
        }
    };

    success!(
        "Found {} artists across {} playlists",
        report.artists.len(),
        report.playlists.len()
    );

    if let Err(e) = ReportManager::new(&username).persist(&report).await {
        warning!("Failed to cache report: {}", e);
    }

    print_report(&report, json);
}

fn print_report(report: &Report, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(out) => println!("{}", out),
            Err(e) => warning!("Failed to serialize report: {}", e),
        }
        return;
    }

    let table_rows: Vec<ArtistTableRow> = report
        .artists
        .iter()
        .map(|a| ArtistTableRow {
            name: a.name.clone(),
            popularity: a.popularity,
            genres: a.genres.iter().take(3).cloned().collect::<Vec<_>>().join(","),
            tracks: a.tracks.len(),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
