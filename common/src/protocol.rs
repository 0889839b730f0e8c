//! `/api/upload/` とのやり取り
//!
//! 送信はmultipart（`images` フィールドを繰り返す）、応答はJSON。
//! 応答の解釈はトランスポート（fetch / reqwest）に依存しないようここに集約する。

use crate::error::{Error, Result};
use crate::types::{ErrorBody, UploadResponse, UploadResult};

/// ブラウザから見たアップロード先
pub const UPLOAD_ENDPOINT: &str = "/api/upload/";

/// multipartのフィールド名（ファイルごとに繰り返す）
pub const IMAGES_FIELD: &str = "images";

/// 受信した応答（ボディは読み込み済み）
#[derive(Debug, Clone, Copy)]
pub struct HttpReply<'a> {
    pub status: u16,
    pub status_text: &'a str,
    pub content_type: Option<&'a str>,
    pub body: &'a str,
}

impl HttpReply<'_> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn is_json(&self) -> bool {
        self.content_type
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false)
    }
}

/// 成功時の結果
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    /// サーバー順の結果（1件以上）
    Results(Vec<UploadResult>),
    /// 成功したが結果が空
    NoResults,
}

/// 応答を解釈する
///
/// - 非2xx: JSONの `detail` / `error` を優先、なければ `Upload failed: <status text>`
/// - 2xxでもJSONでなければ `Error::NonJsonResponse`
/// - JSONが壊れていれば `Error::Json`
pub fn interpret_reply(reply: &HttpReply<'_>) -> Result<BatchOutcome> {
    if !reply.is_success() {
        return Err(Error::UploadFailed(failure_message(reply)));
    }

    if !reply.is_json() {
        return Err(Error::NonJsonResponse);
    }

    let response: UploadResponse = serde_json::from_str(reply.body)?;
    if response.results.is_empty() {
        Ok(BatchOutcome::NoResults)
    } else {
        Ok(BatchOutcome::Results(response.results))
    }
}

fn failure_message(reply: &HttpReply<'_>) -> String {
    serde_json::from_str::<ErrorBody>(reply.body)
        .ok()
        .and_then(|body| body.message().map(str::to_string))
        .unwrap_or_else(|| format!("Upload failed: {}", reply.status_text))
}
