use std::collections::HashSet;

use crate::types::{Artist, SearchArtistObject, Track};

/// Hard upstream limit on the number of artist ids one batch lookup accepts.
pub const MAX_ARTIST_IDS_PER_REQUEST: usize = 50;

/// Removes tracks that repeat an already-seen id, keeping first-seen order.
pub fn dedup_tracks(tracks: &mut Vec<Track>) {
    let mut seen_ids = HashSet::new();
    tracks.retain(|track| seen_ids.insert(track.id.clone()));
}

/// Collects every artist id referenced by the track sequence, de-duplicated
/// and in first-seen order.
pub fn unique_artist_ids(tracks: &[Track]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();

    for track in tracks {
        for id in &track.artist_ids {
            if seen.insert(id.clone()) {
                ids.push(id.clone());
            }
        }
    }

    ids
}

/// Partitions artist ids into consecutive comma-joined batches, each within
/// the per-request limit of the batch lookup endpoint.
pub fn batch_ids(ids: &[String]) -> Vec<String> {
    ids.chunks(MAX_ARTIST_IDS_PER_REQUEST)
        .map(|chunk| chunk.join(","))
        .collect()
}

/// Attaches to each artist every track referencing its id, in track scan
/// order. Tracks are expected to be de-duplicated already, so no track is
/// attached to the same artist twice.
pub fn attach_tracks(artists: &mut [Artist], tracks: &[Track]) {
    for artist in artists.iter_mut() {
        artist.tracks = tracks
            .iter()
            .filter(|track| track.artist_ids.iter().any(|id| id == &artist.id))
            .cloned()
            .collect();
    }
}

/// Finds the first search result whose name equals the wanted name ignoring
/// case, preserving API result order.
pub fn match_artist_name<'a>(
    items: &'a [SearchArtistObject],
    name: &str,
) -> Option<&'a SearchArtistObject> {
    let wanted = name.to_lowercase();
    items.iter().find(|item| item.name.to_lowercase() == wanted)
}
