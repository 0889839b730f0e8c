//! 結果エリアコンポーネント
//!
//! バッチごとに結果を丸ごと作り直す。1件ごとに独立したノードを描画する。

use leptos::prelude::*;
use ocr_upload_common::view::NO_RESULTS_MESSAGE;
use ocr_upload_common::{ResultBody, ResultView, ResultsPanel};
use crate::components::action_buttons::ActionButtons;

#[component]
pub fn ResultsArea(panel: Signal<ResultsPanel>) -> impl IntoView {
    view! {
        <div
            class="results-area"
            style:display=move || if panel.with(ResultsPanel::is_visible) { "block" } else { "none" }
        >
            <div class="results-container">
                {move || match panel.get() {
                    ResultsPanel::Hidden => ().into_any(),
                    ResultsPanel::Items(items) => items
                        .into_iter()
                        .map(|item| view! { <ResultItem item=item /> })
                        .collect_view()
                        .into_any(),
                    ResultsPanel::NoResults => view! {
                        <p class="text-muted">{NO_RESULTS_MESSAGE}</p>
                    }
                    .into_any(),
                    ResultsPanel::Failed(message) => view! {
                        <div class="alert alert-danger">
                            "Error: "<span class="error-text">{message}</span>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn ResultItem(item: ResultView) -> impl IntoView {
    let badge_class = item.badge_class();
    let ResultView {
        key,
        filename,
        badge_text,
        image,
        body,
        ..
    } = item;

    let content = match body {
        ResultBody::Text { text, actions } => view! {
            <div class="result-text-container">
                <pre class="result-text">{text}</pre>
                <ActionButtons actions=actions />
            </div>
        }
        .into_any(),
        // 失敗時はテキストと操作ボタンを出さない
        ResultBody::Error(message) => view! {
            <div class="error-message">{message}</div>
        }
        .into_any(),
    };

    view! {
        <div class="result-item" data-id=key>
            <div class="result-header">
                <h5 class="filename">{filename}</h5>
                <span class=badge_class>{badge_text}</span>
            </div>
            {image.map(|preview| view! {
                <div class="image-preview">
                    <img src={preview.src} alt={preview.alt} />
                </div>
            })}
            {content}
        </div>
    }
}
