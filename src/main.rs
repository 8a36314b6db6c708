#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use leptos::prelude::*;
    use leptos_axum::generate_route_list;
    use song_feed::router;
    use song_feed::{app::*, model::types::{AppState, Config}};
    use tracing::info;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Loading configuration...");
    let config = Config::from_env()?;
    let conf = get_configuration(None)?;
    let leptos_options: LeptosOptions = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    info!("Loading state...");
    let state = AppState::new(leptos_options, config).await?;
    let app = router::new(routes, state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
