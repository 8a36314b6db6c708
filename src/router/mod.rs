pub mod api;

use crate::app::shell;
use crate::model::types::{AppState, MEDIA_ROUTE};
use axum::Router;
use leptos_axum::{file_and_error_handler, AxumRouteListing, LeptosRoutes};
use tower_http::services::ServeDir;

pub fn new(leptos_routes: Vec<AxumRouteListing>, app_state: AppState) -> Router {
    Router::new()
        .leptos_routes(&app_state, leptos_routes, {
            let options = app_state.leptos_options.clone();
            move || shell(options.clone())
        })
        .merge(api::routes(app_state.config.upload_limit_bytes))
        .nest_service(MEDIA_ROUTE, ServeDir::new(app_state.store.root()))
        .fallback(file_and_error_handler::<AppState, _>(shell))
        .with_state(app_state)
}
