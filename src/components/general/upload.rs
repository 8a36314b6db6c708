use crate::model::{
    requests::upload_song,
    types::{selected_upload, UploadFollowUp, FILE_INPUT_ID, UPLOAD_FORM_ID},
};
use leptos::{
    ev::SubmitEvent,
    html,
    logging::{error, log},
    prelude::*,
    task::spawn_local,
};
use web_sys::{File, HtmlInputElement};

fn selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

/// Posts the chosen file and calls `on_uploaded` once the server has stored it.
///
/// A failed upload leaves the input as it is so the user can just submit again.
/// Nothing stops a second submit while the first one is still in flight.
#[component]
pub fn UploadForm(#[prop(into)] on_uploaded: Callback<()>) -> impl IntoView {
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let input = match input_ref.get_untracked() {
            Some(input) => input,
            None => {
                error!("file input not found");
                return;
            }
        };

        spawn_local(async move {
            let result = match selected_upload(selected_file(&input)) {
                Ok(file) => upload_song(&file).await,
                Err(e) => Err(e),
            };
            match &result {
                Ok(receipt) => log!("uploaded song: {:?}", receipt),
                Err(e) => error!("Error uploading song: {:?}", e),
            }

            let follow_up = UploadFollowUp::from_result(&result);
            if follow_up.clear_input {
                input.set_value("");
            }
            if let Some(message) = follow_up.alert {
                gloo::dialogs::alert(&message);
            }
            if follow_up.refresh_feed {
                on_uploaded.run(());
            }
        });
    };

    view! {
        <form id=UPLOAD_FORM_ID class="upload-form" on:submit=on_submit>
            <div class="input-with-label">
                <label for=FILE_INPUT_ID>"Song file"</label>
                <input type="file" id=FILE_INPUT_ID class="form-control" node_ref=input_ref />
            </div>
            <button type="submit" class="btn btn-primary">
                "Upload"
            </button>
        </form>
    }
}
