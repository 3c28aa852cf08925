use std::collections::HashSet;

use lineupcli::report::{build_report, filter_by_lineup};
use lineupcli::types::{Artist, Playlist, PlaylistOwner, Track};

fn create_test_track(id: &str) -> Track {
    Track {
        id: id.to_string(),
        name: format!("{}_name", id),
        popularity: 42,
        href: Some(format!("https://open.spotify.com/track/{}", id)),
        image_url: Some(format!("https://i.scdn.co/image/{}", id)),
        artist_ids: Vec::new(),
    }
}

fn create_test_artist(id: &str, tracks: Vec<Track>) -> Artist {
    Artist {
        id: id.to_string(),
        name: format!("{}_name", id),
        popularity: 50,
        href: None,
        image_url: None,
        genres: vec!["electronic".to_string(), "house".to_string()],
        tracks,
    }
}

fn create_test_playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        owner: PlaylistOwner {
            id: "owner".to_string(),
            display_name: None,
        },
    }
}

#[test]
fn test_build_report_drops_artists_without_tracks() {
    let artists = vec![
        create_test_artist("a1", Vec::new()),
        create_test_artist("a2", vec![create_test_track("t1")]),
    ];

    let report = build_report("someone", &artists, &[]);

    assert_eq!(report.artists.len(), 1);
    assert_eq!(report.artists[0].name, "a2_name");
}

#[test]
fn test_build_report_collects_playlist_names_in_order() {
    let playlists = vec![
        create_test_playlist("p1", "Morning Mix"),
        create_test_playlist("p2", "Late Night"),
    ];

    let report = build_report("someone", &[], &playlists);

    assert_eq!(report.playlists, vec!["Morning Mix", "Late Night"]);
    assert_eq!(report.username, "someone");
    assert!(report.artists.is_empty());
}

#[test]
fn test_build_report_maps_track_fields() {
    let artists = vec![create_test_artist("a1", vec![create_test_track("t1")])];

    let report = build_report("someone", &artists, &[]);

    let artist = &report.artists[0];
    assert_eq!(artist.popularity, 50);
    assert_eq!(artist.genres, vec!["electronic", "house"]);

    let track = &artist.tracks[0];
    assert_eq!(track.name, "t1_name");
    assert_eq!(track.popularity, 42);
    assert_eq!(
        track.href.as_deref(),
        Some("https://open.spotify.com/track/t1")
    );
    assert_eq!(track.image_url.as_deref(), Some("https://i.scdn.co/image/t1"));
}

#[test]
fn test_filter_by_lineup_keeps_only_lineup_ids() {
    let artists = vec![
        create_test_artist("a1", vec![create_test_track("t1")]),
        create_test_artist("a2", vec![create_test_track("t2")]),
        create_test_artist("a3", Vec::new()),
    ];
    let lineup_ids: HashSet<String> = ["a2", "a3"].iter().map(|s| s.to_string()).collect();

    let filtered = filter_by_lineup(artists, &lineup_ids);

    let ids: Vec<&String> = filtered.iter().map(|a| &a.id).collect();
    assert_eq!(ids, vec!["a2", "a3"]);
}

#[test]
fn test_filter_by_lineup_with_empty_lineup() {
    let artists = vec![create_test_artist("a1", vec![create_test_track("t1")])];

    let filtered = filter_by_lineup(artists, &HashSet::new());

    assert!(filtered.is_empty());
}

#[test]
fn test_filter_then_build_drops_unmatched_and_empty() {
    // a1 is on the lineup with a track, a2 is on the lineup without tracks,
    // a3 has a track but is not on the lineup
    let artists = vec![
        create_test_artist("a1", vec![create_test_track("t1")]),
        create_test_artist("a2", Vec::new()),
        create_test_artist("a3", vec![create_test_track("t2")]),
    ];
    let lineup_ids: HashSet<String> = ["a1", "a2"].iter().map(|s| s.to_string()).collect();

    let filtered = filter_by_lineup(artists, &lineup_ids);
    let report = build_report("someone", &filtered, &[]);

    assert_eq!(report.artists.len(), 1);
    assert_eq!(report.artists[0].name, "a1_name");
}
