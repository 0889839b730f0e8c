//! `/api/upload/` への送信
//!
//! multipartで画像をまとめて1回POSTし、応答の解釈は共通ライブラリに任せる。

use crate::browser::{describe_js_error, PickedFile};
use ocr_upload_common::{
    interpret_reply, BatchOutcome, Error, HttpReply, Result, UploadBatch, UploadCandidate,
    IMAGES_FIELD, UPLOAD_ENDPOINT,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

/// 読み込み済みの応答
struct ReceivedReply {
    status: u16,
    status_text: String,
    content_type: Option<String>,
    body: String,
}

impl ReceivedReply {
    fn as_reply(&self) -> HttpReply<'_> {
        HttpReply {
            status: self.status,
            status_text: &self.status_text,
            content_type: self.content_type.as_deref(),
            body: &self.body,
        }
    }
}

/// バッチを送信して結果を返す
pub async fn submit(batch: &UploadBatch<PickedFile>) -> Result<BatchOutcome> {
    let form = build_form(batch).map_err(transport_error)?;
    let received = call_upload_api(&form).await.map_err(transport_error)?;
    interpret_reply(&received.as_reply())
}

fn build_form(batch: &UploadBatch<PickedFile>) -> std::result::Result<FormData, JsValue> {
    let form = FormData::new()?;
    for file in batch.files() {
        form.append_with_blob_and_filename(IMAGES_FIELD, file.as_file(), &file.file_name())?;
    }
    Ok(form)
}

async fn call_upload_api(form: &FormData) -> std::result::Result<ReceivedReply, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(form);

    let request = Request::new_with_str_and_init(UPLOAD_ENDPOINT, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let content_type = resp.headers().get("content-type")?;
    let body = JsFuture::from(resp.text()?)
        .await?
        .as_string()
        .unwrap_or_default();

    Ok(ReceivedReply {
        status: resp.status(),
        status_text: resp.status_text(),
        content_type,
        body,
    })
}

fn transport_error(value: JsValue) -> Error {
    Error::Transport(describe_js_error(&value))
}
