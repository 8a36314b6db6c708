//! Calls the browser makes against the song api.

use crate::model::types::*;
use gloo::net::http::{Request, Response};
use web_sys::{File, FormData};

pub async fn fetch_songs() -> Result<Vec<SongRecord>, Error> {
    let response = Request::get(SONGS_ENDPOINT).send().await?;
    let response = ok_or_status(response)?;
    Ok(response.json::<Vec<SongRecord>>().await?)
}

pub async fn upload_song(file: &File) -> Result<UploadReceipt, Error> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())?;

    let response = Request::post(UPLOAD_ENDPOINT).body(form)?.send().await?;
    let response = ok_or_status(response)?;
    Ok(response.json::<UploadReceipt>().await?)
}

fn ok_or_status(response: Response) -> Result<Response, Error> {
    if response.ok() {
        Ok(response)
    } else {
        Err(Error::Status {
            status: response.status(),
            message: response.status_text(),
        })
    }
}
