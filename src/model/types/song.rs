use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SongRecord {
    /// name of the stored file, the client doesn't need it
    #[serde(default)]
    pub key: String,
    pub title: String,
    pub artist: String,
    /// already formatted by the server
    pub upload_date: String,
    pub url: String,
}

/// The text shown on one card of the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongCard {
    pub title: String,
    pub artist_line: String,
    pub uploaded_line: String,
    pub play_url: String,
}

impl From<&SongRecord> for SongCard {
    fn from(song: &SongRecord) -> Self {
        Self {
            title: song.title.clone(),
            artist_line: format!("Artist: {}", song.artist),
            uploaded_line: format!("Uploaded: {}", song.upload_date),
            play_url: song.url.clone(),
        }
    }
}

/// What the server answers to an upload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub message: String,
    pub song: SongRecord,
}
