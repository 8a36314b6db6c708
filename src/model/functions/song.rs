use crate::model::types::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::io::ErrorKind;
use std::time::SystemTime;
use tracing::{debug, warn};

pub const UNKNOWN_ARTIST: &str = "Unknown";
pub const UPLOAD_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Every stored song, sorted by key.
pub async fn get_songs(store: &SongStore) -> Result<Vec<SongRecord>, Error> {
    let mut entries = tokio::fs::read_dir(store.root()).await?;
    let mut songs = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let key = match entry.file_name().into_string() {
            Ok(key) => key,
            Err(name) => {
                warn!("skipping song with a non utf-8 file name: {:?}", name);
                continue;
            }
        };
        // hidden files, which includes uploads still being written
        if key.starts_with('.') {
            continue;
        }
        // a song replaced or removed while listing is just left out
        let metadata = match entry.metadata().await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_file() {
            continue;
        }
        songs.push(song_record(store, key, metadata.modified()?));
    }

    songs.sort_by(|a, b| a.key.cmp(&b.key));
    debug!("Returning {} songs", songs.len());
    Ok(songs)
}

/// Stores an upload under its sanitized file name, overwriting a song with the same key.
pub async fn save_song(store: &SongStore, file_name: &str, bytes: &[u8]) -> Result<SongRecord, Error> {
    let key = sanitize_key(file_name)
        .ok_or_else(|| Error::InvalidRequest(format!("unusable file name: {:?}", file_name)))?;

    let path = store.root().join(&key);
    // unique per upload so concurrent uploads of one key never share a partial file
    let partial = store
        .root()
        .join(format!(".{}.{}.part", key, cuid2::create_id()));
    let stored = match tokio::fs::write(&partial, bytes).await {
        Ok(()) => tokio::fs::rename(&partial, &path).await,
        Err(e) => Err(e),
    };
    if let Err(e) = stored {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }

    let modified = tokio::fs::metadata(&path).await?.modified()?;
    debug!("stored {} ({} bytes)", key, bytes.len());
    Ok(song_record(store, key, modified))
}

/// Keeps only the last path component of a client supplied file name.
///
/// Leading dots are dropped, hidden names never show up in the listing.
pub fn sanitize_key(file_name: &str) -> Option<String> {
    let key = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim()
        .trim_start_matches('.')
        .trim_start();
    match key {
        "" => None,
        key if key.chars().any(char::is_control) => None,
        key => Some(key.to_string()),
    }
}

pub fn title_from_key(key: &str) -> &str {
    match key.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => key,
    }
}

pub fn song_record(store: &SongStore, key: String, modified: SystemTime) -> SongRecord {
    let upload_date = chrono::DateTime::<chrono::Utc>::from(modified)
        .format(UPLOAD_DATE_FORMAT)
        .to_string();
    let url = format!(
        "{}/{}",
        store.media_base_url().trim_end_matches('/'),
        utf8_percent_encode(&key, PATH_SEGMENT)
    );

    SongRecord {
        title: title_from_key(&key).to_string(),
        artist: UNKNOWN_ARTIST.to_string(),
        upload_date,
        url,
        key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    async fn temp_store() -> SongStore {
        let root = std::env::temp_dir().join(format!("song_feed-{}", cuid2::create_id()));
        SongStore::open(root, "/media").await.unwrap()
    }

    #[test]
    fn sanitize_strips_directories() {
        assert_eq!(sanitize_key("song.mp3").as_deref(), Some("song.mp3"));
        assert_eq!(sanitize_key("../../etc/passwd").as_deref(), Some("passwd"));
        assert_eq!(sanitize_key("C:\\Music\\track 1.flac").as_deref(), Some("track 1.flac"));
        assert_eq!(sanitize_key("dir/.."), None);
        assert_eq!(sanitize_key("   "), None);
        assert_eq!(sanitize_key("a\nb.mp3"), None);
    }

    #[test]
    fn sanitize_drops_leading_dots() {
        assert_eq!(sanitize_key(".intro.mp3").as_deref(), Some("intro.mp3"));
        assert_eq!(sanitize_key("..x.mp3.part").as_deref(), Some("x.mp3.part"));
        assert_eq!(sanitize_key(". hidden.ogg").as_deref(), Some("hidden.ogg"));
        assert_eq!(sanitize_key("..."), None);
    }

    #[test]
    fn title_drops_last_extension() {
        assert_eq!(title_from_key("a.b.mp3"), "a.b");
        assert_eq!(title_from_key("noext"), "noext");
        assert_eq!(title_from_key(".mp3"), ".mp3");
    }

    #[tokio::test]
    async fn record_fields_are_derived_from_the_file() {
        let store = SongStore::open(std::env::temp_dir(), "https://cdn.example.com/songs/")
            .await
            .unwrap();
        let modified = UNIX_EPOCH + Duration::from_secs(1_704_103_200);
        let song = song_record(&store, "My Song.mp3".to_string(), modified);

        assert_eq!(song.title, "My Song");
        assert_eq!(song.artist, "Unknown");
        assert_eq!(song.upload_date, "2024-01-01 10:00:00");
        assert_eq!(song.url, "https://cdn.example.com/songs/My%20Song.mp3");
    }

    #[tokio::test]
    async fn saved_songs_are_listed_in_key_order() {
        let store = temp_store().await;
        assert!(get_songs(&store).await.unwrap().is_empty());

        save_song(&store, "b.mp3", b"bbb").await.unwrap();
        let saved = save_song(&store, "uploads/a.ogg", b"aaa").await.unwrap();
        assert_eq!(saved.key, "a.ogg");
        tokio::fs::create_dir(store.root().join("folder")).await.unwrap();
        tokio::fs::write(store.root().join(".hidden.part"), b"x").await.unwrap();

        let songs = get_songs(&store).await.unwrap();
        let keys: Vec<&str> = songs.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["a.ogg", "b.mp3"]);
        assert_eq!(songs[0].url, "/media/a.ogg");

        tokio::fs::remove_dir_all(store.root()).await.unwrap();
    }

    #[tokio::test]
    async fn saving_twice_overwrites() {
        let store = temp_store().await;
        save_song(&store, "same.mp3", b"first").await.unwrap();
        save_song(&store, "same.mp3", b"second").await.unwrap();

        assert_eq!(get_songs(&store).await.unwrap().len(), 1);
        let bytes = tokio::fs::read(store.root().join("same.mp3")).await.unwrap();
        assert_eq!(bytes, b"second");

        tokio::fs::remove_dir_all(store.root()).await.unwrap();
    }

    #[tokio::test]
    async fn unusable_names_are_rejected() {
        let store = temp_store().await;
        let error = save_song(&store, "..", b"x").await.unwrap_err();
        assert_eq!(error.to_code(), 400);

        tokio::fs::remove_dir_all(store.root()).await.unwrap();
    }

    #[tokio::test]
    async fn dotted_upload_shows_up_in_listing() {
        let store = temp_store().await;
        let saved = save_song(&store, ".intro.mp3", b"intro").await.unwrap();
        assert_eq!(saved.key, "intro.mp3");

        let songs = get_songs(&store).await.unwrap();
        assert_eq!(songs, vec![saved]);

        tokio::fs::remove_dir_all(store.root()).await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_uploads_of_one_key_all_succeed() {
        let store = temp_store().await;
        let payload = vec![7u8; 1024 * 1024];

        for _ in 0..10 {
            let first = tokio::spawn({
                let store = store.clone();
                let payload = payload.clone();
                async move { save_song(&store, "same.mp3", &payload).await }
            });
            let second = tokio::spawn({
                let store = store.clone();
                let payload = payload.clone();
                async move { save_song(&store, "same.mp3", &payload).await }
            });
            let listing = tokio::spawn({
                let store = store.clone();
                async move { get_songs(&store).await }
            });

            assert!(first.await.unwrap().is_ok());
            assert!(second.await.unwrap().is_ok());
            assert!(listing.await.unwrap().is_ok());
        }

        let songs = get_songs(&store).await.unwrap();
        assert_eq!(songs.len(), 1);
        let bytes = tokio::fs::read(store.root().join("same.mp3")).await.unwrap();
        assert_eq!(bytes, payload);

        let mut entries = tokio::fs::read_dir(store.root()).await.unwrap();
        let mut leftovers = Vec::new();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            leftovers.push(entry.file_name());
        }
        assert_eq!(leftovers, vec!["same.mp3"]);

        tokio::fs::remove_dir_all(store.root()).await.unwrap();
    }
}
