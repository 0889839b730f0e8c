//! コピー・ダウンロードボタンコンポーネント

use gloo::console;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use ocr_upload_common::download::{COPIED_LABEL, COPIED_LABEL_MS, COPY_LABEL};
use ocr_upload_common::ResultActions;
use wasm_bindgen_futures::spawn_local;
use crate::browser;

#[component]
pub fn ActionButtons(actions: ResultActions) -> impl IntoView {
    let (copy_label, set_copy_label) = signal(COPY_LABEL);
    let ResultActions {
        text,
        download_name,
    } = actions;

    let on_copy = {
        let text = text.clone();
        move |_| {
            let text = text.clone();
            spawn_local(async move {
                match browser::copy_text(&text).await {
                    Ok(()) => {
                        set_copy_label.set(COPIED_LABEL);
                        Timeout::new(COPIED_LABEL_MS, move || set_copy_label.set(COPY_LABEL))
                            .forget();
                    }
                    Err(e) => console::error!("Failed to copy: ", e),
                }
            });
        }
    };

    let on_download = move |_| {
        if let Err(e) = browser::download_text(&download_name, &text) {
            console::error!("Failed to download: ", e);
        }
    };

    view! {
        <div class="result-actions">
            <button type="button" class="btn btn-sm btn-outline-secondary copy-btn" on:click=on_copy>
                {move || copy_label.get()}
            </button>
            <button type="button" class="btn btn-sm btn-outline-primary download-btn" on:click=on_download>
                "Download .txt"
            </button>
        </div>
    }
}
