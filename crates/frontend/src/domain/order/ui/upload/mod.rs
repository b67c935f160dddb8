use crate::shared::api;
use crate::shared::components::ui::Button;
use leptos::html;
use leptos::prelude::*;

/// Excel upload for channel order sheets. The backend parses the file and
/// creates orders; this page only ships the bytes and reports the outcome.
#[component]
pub fn UploadOrdersPage() -> impl IntoView {
    let file_input: NodeRef<html::Input> = NodeRef::new();
    let status = RwSignal::new(String::new());

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(input) = file_input.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            status.set("Choose a file first".to_string());
            return;
        };

        let Ok(form) = web_sys::FormData::new() else {
            return;
        };
        if form.append_with_blob("file", &file).is_err() {
            return;
        }

        status.set("Uploading...".to_string());
        wasm_bindgen_futures::spawn_local(async move {
            match api::post_form_data("/api/orders:upload", form).await {
                Ok(()) => {
                    status.set("Uploaded and parsed".to_string());
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                }
                Err(err) => status.set(err.message("Failed to upload")),
            }
        });
    };

    view! {
        <div class="upload-page">
            <div class="page__header">
                <div>
                    <h1>"Upload channel orders"</h1>
                    <p class="page__subtitle">
                        "Upload the order sheet exported from the sales channel."
                    </p>
                </div>
            </div>
            <form class="card form" on:submit=handle_submit>
                <label class="form__label" for="order-file">"Order sheet"</label>
                <input
                    id="order-file"
                    class="form__input"
                    type="file"
                    accept=".xlsx,.xls"
                    node_ref=file_input
                />
                <Button button_type="submit">"Upload"</Button>
                {move || {
                    let text = status.get();
                    (!text.is_empty()).then(|| view! { <div class="form__status">{text}</div> })
                }}
            </form>
        </div>
    }
}
