use std::{collections::HashSet, path::PathBuf};

use crate::{
    error::{Error, Result},
    types::{LineupArtist, LineupEntry, LineupFile},
};

pub struct LineupManager {
    artists: Vec<LineupArtist>,
}

impl LineupManager {
    pub fn new(artists: Vec<LineupArtist>) -> Self {
        Self { artists }
    }

    /// Loads the lineup file, accepting both the hand-seeded shape (a list
    /// of bare names) and the resolved shape written by the matcher.
    pub async fn load() -> Result<Self> {
        let path = Self::lineup_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| Error::Storage(format!("{}: {}", path.display(), e)))?;
        let file: LineupFile =
            serde_json::from_str(&content).map_err(|e| Error::Storage(e.to_string()))?;

        let artists = file
            .lineup
            .into_iter()
            .map(|entry| match entry {
                LineupEntry::Resolved(artist) => artist,
                LineupEntry::Name(name) => LineupArtist {
                    name,
                    spotify_id: None,
                },
            })
            .collect();

        Ok(Self { artists })
    }

    pub async fn persist(&self) -> Result<()> {
        let path = Self::lineup_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::Storage(e.to_string()))?;
        }

        let file = LineupFile {
            lineup: self
                .artists
                .iter()
                .cloned()
                .map(LineupEntry::Resolved)
                .collect(),
        };
        let json =
            serde_json::to_string_pretty(&file).map_err(|e| Error::Storage(e.to_string()))?;
        async_fs::write(path, json)
            .await
            .map_err(|e| Error::Storage(e.to_string()))
    }

    pub fn names(&self) -> Vec<String> {
        self.artists.iter().map(|a| a.name.clone()).collect()
    }

    /// Ids of the resolved lineup entries, used as the request-time filter.
    pub fn ids(&self) -> HashSet<String> {
        self.artists
            .iter()
            .filter_map(|a| a.spotify_id.clone())
            .collect()
    }

    pub fn artists(&self) -> &[LineupArtist] {
        &self.artists
    }

    pub fn count(&self) -> usize {
        self.artists.len()
    }

    pub fn lineup_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("lineupcli/data/lineup.json");
        path
    }
}
