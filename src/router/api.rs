use crate::model::{functions, types::*};
use axum::{
    extract::{DefaultBodyLimit, FromRef, Multipart, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, error, info};

/// The json api the feed and the upload form talk to.
pub fn routes<S>(upload_limit_bytes: usize) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    SongStore: FromRef<S>,
{
    Router::new()
        .route(SONGS_ENDPOINT, get(list_songs))
        .route(
            UPLOAD_ENDPOINT,
            post(upload_song).layer(DefaultBodyLimit::max(upload_limit_bytes)),
        )
}

async fn list_songs(State(store): State<SongStore>) -> Result<Json<Vec<SongRecord>>, Error> {
    debug!("listing songs in {}", store.root().display());
    let songs = functions::get_songs(&store)
        .await
        .inspect_err(|e| error!("Error in list_songs: {}", e))?;
    Ok(Json(songs))
}

async fn upload_song(
    State(store): State<SongStore>,
    mut multipart: Multipart,
) -> Result<Json<UploadReceipt>, Error> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field
            .file_name()
            .map(str::to_owned)
            .ok_or_else(|| Error::InvalidRequest("the file field has no file name".to_string()))?;
        let bytes = field.bytes().await?;

        let song = functions::save_song(&store, &file_name, &bytes)
            .await
            .inspect_err(|e| error!("Error storing upload {:?}: {}", file_name, e))?;
        info!("uploaded {} ({} bytes)", song.key, bytes.len());
        return Ok(Json(UploadReceipt {
            message: format!("Uploaded {}", song.title),
            song,
        }));
    }

    Err(Error::InvalidRequest(format!(
        "expected a multipart field named {:?}",
        UPLOAD_FIELD
    )))
}
