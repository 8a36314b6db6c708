use crate::model::types::*;
use icondata::IoPlay;
use leptos::prelude::*;

#[component]
pub fn Song(song: SongRecord) -> impl IntoView {
    let SongCard {
        title,
        artist_line,
        uploaded_line,
        play_url,
    } = SongCard::from(&song);
    let tooltip = title.clone();

    view! {
        <div class="col-md-6 col-lg-4 mb-4 song">
            <div class="card h-100">
                <div class="card-body">
                    <h5 class="card-title" title=tooltip>{title}</h5>
                    <p class="card-text artist">{artist_line}</p>
                    <p class="card-text uploaded">{uploaded_line}</p>
                    <a
                        href=play_url
                        class="btn btn-primary play"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            viewBox=IoPlay.view_box
                            inner_html=IoPlay.data
                        ></svg>
                        "Play"
                    </a>
                </div>
            </div>
        </div>
    }
}
