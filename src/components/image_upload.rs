//! Image picker: file upload with a direct-URL fallback and live preview.

use leptos::prelude::*;

use crate::components::toaster::show_toast;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::images::is_valid_image_url;

/// Image field for the admin forms. `value` holds the hosted image URL;
/// the preview tracks whatever is typed, but only valid URLs (or a cleared
/// field) propagate to `value`.
#[component]
pub fn ImageUpload(
    value: RwSignal<String>,
    #[prop(default = "Image")] label: &'static str,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let uploading = RwSignal::new(false);
    let entry = RwSignal::new(value.get_untracked());

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            uploading.set(true);
            leptos::task::spawn_local(async move {
                match crate::util::images::upload_image(&file).await {
                    Ok(url) => {
                        let _ = value.try_set(url.clone());
                        let _ = entry.try_set(url);
                        show_toast(toasts, ToastKind::Success, "Image uploaded successfully!");
                    }
                    Err(message) => {
                        show_toast(toasts, ToastKind::Error, message);
                    }
                }
                let _ = uploading.try_set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class="image-upload">
            <label class="form__label">{label}</label>

            <input
                class="image-upload__file"
                type="file"
                accept="image/*"
                prop:disabled=move || uploading.get()
                on:change=on_file
            />

            <input
                class="form__input"
                type="url"
                placeholder="...or paste an image URL"
                prop:value=move || entry.get()
                on:input=move |ev| {
                    let url = event_target_value(&ev);
                    entry.set(url.clone());
                    if url.is_empty() || is_valid_image_url(&url) {
                        value.set(url);
                    }
                }
            />

            <Show when=move || uploading.get()>
                <p class="image-upload__status">"Uploading..."</p>
            </Show>

            <Show when=move || !entry.get().is_empty()>
                <img class="image-upload__preview" src=move || entry.get() alt="Preview"/>
            </Show>
        </div>
    }
}
