use crate::components::*;
use crate::model::{requests::fetch_songs, types::*};
use leptos::{logging::error, prelude::*, task::spawn_local};
use leptos_use::use_interval_fn;

#[component]
pub fn HomePage() -> impl IntoView {
    let (feed, set_feed) = signal(FeedState::default());

    // whichever response lands last wins, in-flight fetches are never cancelled
    let refresh = move || {
        spawn_local(async move {
            let result = fetch_songs().await;
            if let Err(e) = &result {
                error!("Error fetching songs: {:?}", e);
            }
            set_feed.set(FeedState::from_fetch(result));
        });
    };

    Effect::new(move |_| refresh());

    // stopped when the page is disposed
    use_interval_fn(refresh, POLL_INTERVAL_MS);

    view! {
        <div id="home-page">
            <div class="big-space-island" id="upload-island">
                <h2>"Upload a song"</h2>
                <UploadForm on_uploaded=Callback::new(move |_| refresh()) />
            </div>
            <div id="feed-island">
                <h2>"Latest songs"</h2>
                <SongFeed feed />
            </div>
        </div>
    }
}
