use std::path::PathBuf;

use crate::{
    error::{Error, Result},
    types::Report,
};

/// Per-username cache of the most recent report, so a run can be inspected
/// again without re-walking the playlist library.
pub struct ReportManager {
    username: String,
}

impl ReportManager {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
        }
    }

    pub async fn load_from_cache(&self) -> Result<Report> {
        let path = self.cache_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| Error::Storage(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&content).map_err(|e| Error::Storage(e.to_string()))
    }

    pub async fn persist(&self, report: &Report) -> Result<()> {
        let path = self.cache_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::Storage(e.to_string()))?;
        }

        let json =
            serde_json::to_string_pretty(report).map_err(|e| Error::Storage(e.to_string()))?;
        async_fs::write(path, json)
            .await
            .map_err(|e| Error::Storage(e.to_string()))
    }

    fn cache_path(&self) -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(format!("lineupcli/cache/report-{}.json", self.username));
        path
    }
}
