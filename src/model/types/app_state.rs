use crate::model::types::*;
use axum::extract::FromRef;

#[derive(FromRef, Clone, Debug)]
pub struct AppState {
    pub store: SongStore,
    pub config: Config,
    pub leptos_options: leptos::config::LeptosOptions,
}

impl AppState {
    pub async fn new(leptos_options: leptos::config::LeptosOptions, config: Config) -> Result<Self, Error> {
        let store = SongStore::open(config.songs_dir.clone(), config.media_base_url.clone()).await?;
        tracing::info!("song store ready...");

        Ok(Self {
            store,
            config,
            leptos_options,
        })
    }
}
