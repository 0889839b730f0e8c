//! `/api/upload/` へのHTTPクライアント
//!
//! 画像をmultipartで1回POSTする。リトライはしない。

use crate::error::Result;
use crate::scanner::LocalFile;
use log::{debug, info};
use ocr_upload_common::{interpret_reply, BatchOutcome, Error, HttpReply, UploadBatch, IMAGES_FIELD};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

pub struct UploadClient {
    http: reqwest::Client,
    endpoint: String,
}

impl UploadClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// バッチのファイルを読み込んでフォームを作る
    pub async fn build_form(batch: &UploadBatch<LocalFile>) -> Result<Form> {
        let mut form = Form::new();
        for file in batch.files() {
            let bytes = tokio::fs::read(&file.path).await?;
            debug!("{} ({} bytes, {})", file.file_name, bytes.len(), file.media_type);
            let part = Part::bytes(bytes)
                .file_name(file.file_name.clone())
                .mime_str(&file.media_type)?;
            form = form.part(IMAGES_FIELD, part);
        }
        Ok(form)
    }

    /// フォームを送信し、応答を解釈する
    pub async fn send(&self, form: Form) -> ocr_upload_common::Result<BatchOutcome> {
        info!("POST {}", self.endpoint);
        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        info!("{} ({} bytes)", status, body.len());

        interpret_reply(&HttpReply {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or(""),
            content_type: content_type.as_deref(),
            body: &body,
        })
    }
}
