use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure classes surfaced by an aggregation run. None of these are
/// recovered internally; each aborts the current run and is reported to the
/// caller as-is.
#[derive(Error, Debug)]
pub enum Error {
    #[error("token exchange failed: {0}")]
    Auth(String),

    #[error("no Spotify user found for '{0}'")]
    UserNotFound(String),

    #[error("unexpected response from {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("artist lookup failed: {0}")]
    ArtistFetch(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(err.to_string())
    }
}
