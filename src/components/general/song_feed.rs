use crate::components::Song;
use crate::model::types::*;
use leptos::prelude::*;

/// Renders whatever the last fetch produced, replacing everything that was shown before.
#[component]
pub fn SongFeed(#[prop(into)] feed: Signal<FeedState>) -> impl IntoView {
    view! {
        <div id=SONG_FEED_ID class="row song-feed">
            {move || match feed.get() {
                FeedState::Loading => {
                    view! { <p class="feed-placeholder">"Loading songs..."</p> }.into_any()
                }
                FeedState::Empty => {
                    view! { <p class="feed-placeholder">"No songs uploaded yet."</p> }.into_any()
                }
                FeedState::Failed(_) => {
                    view! {
                        <p class="feed-placeholder error">
                            "Could not load songs, trying again in a few minutes."
                        </p>
                    }
                        .into_any()
                }
                FeedState::Songs(songs) => {
                    songs
                        .into_iter()
                        .map(|song| view! { <Song song /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
