use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// One page of a cursor-paginated collection endpoint. `next` carries the
/// URL of the following page and is null on the final page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner: PlaylistOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
    pub display_name: Option<String>,
}

/// Wrapper the playlist-tracks endpoint puts around each track. The inner
/// object is null for entries Spotify can no longer resolve.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrackItem {
    pub track: Option<TrackObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackObject {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    pub album: Option<AlbumRef>,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumRef {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: Option<String>,
}

/// Artist reference embedded in a track. Local tracks carry null ids.
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRef {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub popularity: u32,
    pub href: Option<String>,
    pub image_url: Option<String>,
    pub artist_ids: Vec<String>,
}

impl Track {
    /// Builds a track from a playlist item, substituting defaults for
    /// missing optional fields. Returns None for items without a resolvable
    /// track or track id, which carry no usable identity.
    pub fn from_playlist_item(item: PlaylistTrackItem) -> Option<Track> {
        let track = item.track?;
        let id = track.id?;

        Some(Track {
            id,
            name: track.name,
            popularity: track.popularity,
            href: track.external_urls.spotify,
            image_url: track
                .album
                .and_then(|album| album.images.into_iter().next())
                .and_then(|image| image.url),
            artist_ids: track
                .artists
                .into_iter()
                .filter_map(|artist| artist.id)
                .collect(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Response of the batch artist lookup. Unknown ids come back as null
/// entries rather than being omitted from the array.
#[derive(Debug, Clone, Deserialize)]
pub struct SeveralArtistsResponse {
    pub artists: Vec<Option<ArtistObject>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub popularity: u32,
    pub href: Option<String>,
    pub image_url: Option<String>,
    pub genres: Vec<String>,
    pub tracks: Vec<Track>,
}

impl From<ArtistObject> for Artist {
    fn from(artist: ArtistObject) -> Artist {
        Artist {
            id: artist.id,
            name: artist.name,
            popularity: artist.popularity,
            href: artist.external_urls.spotify,
            image_url: artist
                .images
                .into_iter()
                .next()
                .and_then(|image| image.url),
            genres: artist.genres,
            tracks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub artists: Page<SearchArtistObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchArtistObject {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineupFile {
    pub lineup: Vec<LineupEntry>,
}

/// The lineup file is seeded by hand as a list of names and rewritten by
/// the matcher as a list of resolved entries; both shapes parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineupEntry {
    Resolved(LineupArtist),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupArtist {
    pub name: String,
    pub spotify_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub username: String,
    pub artists: Vec<ArtistReport>,
    pub playlists: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistReport {
    pub name: String,
    pub popularity: u32,
    pub href: Option<String>,
    pub image_url: Option<String>,
    pub genres: Vec<String>,
    pub tracks: Vec<TrackReport>,
}

impl From<&Artist> for ArtistReport {
    fn from(artist: &Artist) -> ArtistReport {
        ArtistReport {
            name: artist.name.clone(),
            popularity: artist.popularity,
            href: artist.href.clone(),
            image_url: artist.image_url.clone(),
            genres: artist.genres.clone(),
            tracks: artist.tracks.iter().map(TrackReport::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackReport {
    pub name: String,
    pub popularity: u32,
    pub href: Option<String>,
    pub image_url: Option<String>,
}

impl From<&Track> for TrackReport {
    fn from(track: &Track) -> TrackReport {
        TrackReport {
            name: track.name.clone(),
            popularity: track.popularity,
            href: track.href.clone(),
            image_url: track.image_url.clone(),
        }
    }
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub popularity: u32,
    pub genres: String,
    pub tracks: usize,
}

#[derive(Tabled)]
pub struct LineupTableRow {
    pub name: String,
    pub spotify_id: String,
}
