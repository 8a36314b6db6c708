use super::{Error, MEDIA_ROUTE};
use std::path::PathBuf;

pub const DEFAULT_SONGS_DIR: &str = "songs";
pub const DEFAULT_UPLOAD_LIMIT_MB: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// directory the uploaded songs are kept in
    pub songs_dir: PathBuf,
    /// prefix of the urls handed to the client, can point at a cdn in front of the files
    pub media_base_url: String,
    pub upload_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        if dotenvy::dotenv().is_err() {
            tracing::warn!("didn't find env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let songs_dir = lookup("SONGS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SONGS_DIR));
        let media_base_url = lookup("MEDIA_BASE_URL").unwrap_or_else(|| MEDIA_ROUTE.to_string());
        let upload_limit_mb = match lookup("UPLOAD_LIMIT_MB") {
            Some(value) => value.trim().parse::<usize>().map_err(|e| {
                Error::Config(format!("UPLOAD_LIMIT_MB must be a number of megabytes, got {:?}: {}", value, e))
            })?,
            None => DEFAULT_UPLOAD_LIMIT_MB,
        };

        let upload_limit_bytes = upload_limit_mb.checked_mul(1024 * 1024).ok_or_else(|| {
            Error::Config(format!("UPLOAD_LIMIT_MB is too large: {}", upload_limit_mb))
        })?;

        Ok(Self {
            songs_dir,
            media_base_url,
            upload_limit_bytes,
        })
    }
}
