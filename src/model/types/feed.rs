use crate::model::types::*;

pub const SONGS_ENDPOINT: &str = "/api/songs";
pub const UPLOAD_ENDPOINT: &str = "/api/upload";
pub const MEDIA_ROUTE: &str = "/media";
/// multipart field the upload is sent in
pub const UPLOAD_FIELD: &str = "file";

pub const SONG_FEED_ID: &str = "song-feed";
pub const UPLOAD_FORM_ID: &str = "upload-form";
pub const FILE_INPUT_ID: &str = "file-input";

pub const POLL_INTERVAL_MS: u64 = 5 * 60 * 1000;

/// What the feed container currently shows. Every fetch replaces it whole.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedState {
    #[default]
    Loading,
    Songs(Vec<SongRecord>),
    Empty,
    Failed(String),
}

impl FeedState {
    pub fn from_fetch(result: Result<Vec<SongRecord>, Error>) -> Self {
        match result {
            Ok(songs) if songs.is_empty() => FeedState::Empty,
            Ok(songs) => FeedState::Songs(songs),
            Err(e) => FeedState::Failed(e.to_string()),
        }
    }

    pub fn cards(&self) -> Vec<SongCard> {
        match self {
            FeedState::Songs(songs) => songs.iter().map(SongCard::from).collect(),
            _ => Vec::new(),
        }
    }
}

/// The file an upload sends, submitting without one fails before anything is sent.
pub fn selected_upload<F>(selected: Option<F>) -> Result<F, Error> {
    selected.ok_or_else(|| Error::InvalidRequest("no file selected".to_string()))
}

/// What the upload form does once the server has answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFollowUp {
    pub clear_input: bool,
    pub refresh_feed: bool,
    pub alert: Option<String>,
}

impl UploadFollowUp {
    pub fn from_result(result: &Result<UploadReceipt, Error>) -> Self {
        match result {
            Ok(_) => Self {
                clear_input: true,
                refresh_feed: true,
                alert: None,
            },
            Err(e) => Self {
                clear_input: false,
                refresh_feed: false,
                alert: Some(format!("Error uploading song: {}", e)),
            },
        }
    }
}
