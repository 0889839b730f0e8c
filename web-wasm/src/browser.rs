//! ブラウザAPIの薄いラッパー
//!
//! ファイル候補・クリップボード・テキストのダウンロード

use js_sys::Array;
use ocr_upload_common::download::DOWNLOAD_MIME;
use ocr_upload_common::UploadCandidate;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, FileList, HtmlAnchorElement, Url, Window};

/// ドロップ・選択されたファイル
#[derive(Debug, Clone)]
pub struct PickedFile(pub File);

impl PickedFile {
    pub fn as_file(&self) -> &File {
        &self.0
    }
}

impl UploadCandidate for PickedFile {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> String {
        self.0.type_()
    }
}

pub fn files_from_list(list: &FileList) -> Vec<PickedFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(PickedFile)
        .collect()
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))
}

/// `navigator.clipboard.writeText` を呼んで完了を待つ
pub async fn copy_text(text: &str) -> Result<(), JsValue> {
    let clipboard = window()?.navigator().clipboard();
    // 非セキュアコンテキストでは未定義
    if clipboard.is_undefined() {
        return Err(JsValue::from_str("clipboard unavailable"));
    }

    JsFuture::from(clipboard.write_text(text)).await?;
    Ok(())
}

/// テキストを `file_name` で保存させ、一時URLを解放する
pub fn download_text(file_name: &str, text: &str) -> Result<(), JsValue> {
    let parts = Array::of1(&JsValue::from_str(text));
    let options = BlobPropertyBag::new();
    options.set_type(DOWNLOAD_MIME);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let saved = click_download_link(&url, file_name);
    Url::revoke_object_url(&url)?;
    saved
}

fn click_download_link(url: &str, file_name: &str) -> Result<(), JsValue> {
    let document = window()?
        .document()
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(url);
    anchor.set_download(file_name);
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    Ok(())
}

/// JSの例外をメッセージ文字列にする
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
