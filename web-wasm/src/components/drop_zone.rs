//! ドロップゾーンコンポーネント
//!
//! ドラッグ&ドロップとクリックでのファイル選択を受け付ける。
//! 送信中は受け付けない。

use leptos::html::Input;
use leptos::prelude::*;
use web_sys::{DragEvent, Event};
use crate::browser::{files_from_list, PickedFile};

#[component]
pub fn DropZone<F>(
    file_input: NodeRef<Input>,
    accepts_input: Signal<bool>,
    on_files: F,
) -> impl IntoView
where
    F: Fn(Vec<PickedFile>) + 'static + Clone + Send,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = {
        let on_files = on_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if !accepts_input.get_untracked() {
                return;
            }

            let files = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .map(|list| files_from_list(&list))
                .unwrap_or_default();
            if !files.is_empty() {
                on_files(files);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if accepts_input.get_untracked() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if !accepts_input.get_untracked() {
            return;
        }
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_change = move |_: Event| {
        let files = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .map(|list| files_from_list(&list))
            .unwrap_or_default();
        if !files.is_empty() {
            on_files(files);
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["drop-zone"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if !accepts_input.get() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📷"</div>
            <p>"Drag & drop images here, or click to select"</p>
            <p class="text-muted">"Image files only (PNG, JPEG, ...)"</p>
        </div>
        <input
            type="file"
            class="file-input"
            accept="image/*"
            multiple=true
            style="display: none"
            node_ref=file_input
            disabled=move || !accepts_input.get()
            on:change=on_change
        />
    }
}
