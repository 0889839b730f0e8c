//! メインアプリケーションコンポーネント
//!
//! 入力の受付 → 送信 → 結果表示 を1つのセッション状態でつなぐ。

use gloo::{console, dialogs};
use leptos::html::Input;
use leptos::prelude::*;
use ocr_upload_common::{select_images, Error, UploadSession};
use wasm_bindgen_futures::spawn_local;
use crate::api::upload;
use crate::browser::PickedFile;
use crate::components::{
    header::Header,
    drop_zone::DropZone,
    spinner::Spinner,
    results_area::ResultsArea,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(UploadSession::new());
    let file_input = NodeRef::<Input>::new();

    let accepts_input = Signal::derive(move || session.with(UploadSession::accepts_input));
    let is_loading = Signal::derive(move || session.with(UploadSession::is_loading));
    let panel = Signal::derive(move || session.with(|s| s.panel().clone()));

    let on_files = move |files: Vec<PickedFile>| {
        start_batch(session, file_input, files);
    };

    view! {
        <div class="container">
            <Header />

            <DropZone
                file_input=file_input
                accepts_input=accepts_input
                on_files=on_files
            />

            <Spinner visible=is_loading />

            <ResultsArea panel=panel />
        </div>
    }
}

/// 1バッチ分の処理。終了時は必ず読み込み表示を消し、ファイル入力をリセットする。
fn start_batch(session: RwSignal<UploadSession>, file_input: NodeRef<Input>, files: Vec<PickedFile>) {
    let selection = select_images(files);
    for name in &selection.skipped {
        console::warn!(format!("Skipping non-image file: {}", name));
    }

    let batch = match session.try_update(|s| s.begin(selection)) {
        Some(Ok(batch)) => batch,
        Some(Err(Error::NoValidImages)) => {
            reset_file_input(file_input);
            dialogs::alert(&Error::NoValidImages.to_string());
            return;
        }
        Some(Err(e)) => {
            console::warn!(e.to_string());
            return;
        }
        None => return,
    };

    spawn_local(async move {
        let outcome = upload::submit(&batch).await;
        match &outcome {
            Ok(_) => console::log!(format!("Processing complete: {} file(s)", batch.len())),
            Err(e) => console::error!(format!("Error processing files: {}", e)),
        }

        session.update(|s| s.finish(outcome));
        reset_file_input(file_input);
    });
}

fn reset_file_input(file_input: NodeRef<Input>) {
    if let Some(input) = file_input.get_untracked() {
        input.set_value("");
    }
}
