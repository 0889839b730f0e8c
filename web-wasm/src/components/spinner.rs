//! 読み込み中インジケーター

use leptos::prelude::*;

#[component]
pub fn Spinner(visible: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class="spinner"
            role="status"
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            <p class="spinner-text">"Processing images..."</p>
        </div>
    }
}
