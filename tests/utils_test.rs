use lineupcli::types::{Artist, SearchArtistObject, Track};
use lineupcli::utils::*;

// Helper function to create a test track
fn create_test_track(id: &str, artist_ids: &[&str]) -> Track {
    Track {
        id: id.to_string(),
        name: format!("{}_name", id),
        popularity: 0,
        href: None,
        image_url: None,
        artist_ids: artist_ids.iter().map(|a| a.to_string()).collect(),
    }
}

// Helper function to create a test artist without tracks
fn create_test_artist(id: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: format!("{}_name", id),
        popularity: 0,
        href: None,
        image_url: None,
        genres: Vec::new(),
        tracks: Vec::new(),
    }
}

fn create_search_result(name: &str, id: &str) -> SearchArtistObject {
    SearchArtistObject {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn test_dedup_tracks() {
    let mut tracks = vec![
        create_test_track("t1", &["a1"]),
        create_test_track("t2", &["a2"]),
        create_test_track("t1", &["a1"]), // duplicate
        create_test_track("t3", &["a3"]),
    ];

    dedup_tracks(&mut tracks);

    // Should keep the first occurrence of each id, in first-seen order
    let ids: Vec<&String> = tracks.iter().map(|t| &t.id).collect();
    assert_eq!(ids, vec!["t1", "t2", "t3"]);
}

#[test]
fn test_dedup_tracks_is_idempotent() {
    let mut tracks = vec![
        create_test_track("t1", &["a1"]),
        create_test_track("t2", &["a2"]),
        create_test_track("t2", &["a2"]),
    ];

    dedup_tracks(&mut tracks);
    let first_pass: Vec<String> = tracks.iter().map(|t| t.id.clone()).collect();

    dedup_tracks(&mut tracks);
    let second_pass: Vec<String> = tracks.iter().map(|t| t.id.clone()).collect();

    assert_eq!(first_pass, second_pass);
}

#[test]
fn test_unique_artist_ids_order_and_dedup() {
    let tracks = vec![
        create_test_track("t1", &["a2", "a1"]),
        create_test_track("t2", &["a1", "a3"]),
        create_test_track("t3", &[]),
    ];

    let ids = unique_artist_ids(&tracks);

    // First-seen order across the whole scan, no repeats
    assert_eq!(ids, vec!["a2", "a1", "a3"]);
}

#[test]
fn test_batch_ids_partitioning() {
    let ids: Vec<String> = (0..120).map(|i| format!("id{}", i)).collect();

    let batches = batch_ids(&ids);

    // ceil(120 / 50) batches
    assert_eq!(batches.len(), 3);

    // Every batch stays within the per-request limit
    for batch in &batches {
        assert!(batch.split(',').count() <= MAX_ARTIST_IDS_PER_REQUEST);
    }
    assert_eq!(batches[0].split(',').count(), 50);
    assert_eq!(batches[1].split(',').count(), 50);
    assert_eq!(batches[2].split(',').count(), 20);

    // Concatenating the batches preserves the input order
    let rejoined: Vec<&str> = batches.iter().flat_map(|b| b.split(',')).collect();
    assert_eq!(rejoined, ids.iter().map(|s| s.as_str()).collect::<Vec<_>>());
}

#[test]
fn test_batch_ids_boundaries() {
    let exactly_fifty: Vec<String> = (0..50).map(|i| i.to_string()).collect();
    assert_eq!(batch_ids(&exactly_fifty).len(), 1);

    let fifty_one: Vec<String> = (0..51).map(|i| i.to_string()).collect();
    assert_eq!(batch_ids(&fifty_one).len(), 2);

    assert!(batch_ids(&[]).is_empty());
}

#[test]
fn test_attach_tracks() {
    let mut artists = vec![
        create_test_artist("a1"),
        create_test_artist("a2"),
        create_test_artist("a3"),
    ];
    let tracks = vec![
        create_test_track("t1", &["a1", "a2"]),
        create_test_track("t2", &["a2"]),
    ];

    attach_tracks(&mut artists, &tracks);

    let track_ids = |artist: &Artist| {
        artist
            .tracks
            .iter()
            .map(|t| t.id.clone())
            .collect::<Vec<_>>()
    };

    assert_eq!(track_ids(&artists[0]), vec!["t1"]);
    assert_eq!(track_ids(&artists[1]), vec!["t1", "t2"]);
    assert!(artists[2].tracks.is_empty());
}

#[test]
fn test_attach_tracks_no_duplicate_attachment() {
    let mut artists = vec![create_test_artist("a1")];
    let tracks = vec![
        create_test_track("t1", &["a1"]),
        create_test_track("t2", &["a1"]),
    ];

    attach_tracks(&mut artists, &tracks);

    // Each referencing track is attached exactly once
    let t1_count = artists[0].tracks.iter().filter(|t| t.id == "t1").count();
    assert_eq!(t1_count, 1);
    assert_eq!(artists[0].tracks.len(), 2);
}

#[test]
fn test_match_artist_name_case_insensitive() {
    let items = vec![create_search_result("daft punk", "x")];

    let matched = match_artist_name(&items, "Daft Punk");

    assert_eq!(matched.map(|a| a.id.as_str()), Some("x"));
}

#[test]
fn test_match_artist_name_first_match_wins() {
    let items = vec![
        create_search_result("Boards of Canada", "first"),
        create_search_result("boards of canada", "second"),
    ];

    let matched = match_artist_name(&items, "Boards of Canada");

    assert_eq!(matched.map(|a| a.id.as_str()), Some("first"));
}

#[test]
fn test_match_artist_name_requires_exact_match() {
    let items = vec![
        create_search_result("Daft Punky", "x"),
        create_search_result("Daft", "y"),
    ];

    assert!(match_artist_name(&items, "Daft Punk").is_none());
    assert!(match_artist_name(&[], "Daft Punk").is_none());
}
