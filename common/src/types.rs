//! アップロード結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - UploadResult: サーバーが返す1ファイルごとの処理結果
//! - UploadResponse: `/api/upload/` 成功時のレスポンス全体
//! - ErrorBody: 失敗時レスポンスのエラー本文

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// 結果ID（サーバーは整数、レコード作成前に失敗した場合はnullを返す）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultId::Number(n) => write!(f, "{}", n),
            ResultId::Text(s) => f.write_str(s),
        }
    }
}

/// 処理ステータス
///
/// 未知の値はそのまま保持し、表示上は失敗扱いとする。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResultStatus {
    Pending,
    Completed,
    Failed,
    Other(String),
}

impl ResultStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ResultStatus::Pending => "PENDING",
            ResultStatus::Completed => "COMPLETED",
            ResultStatus::Failed => "FAILED",
            ResultStatus::Other(s) => s,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, ResultStatus::Completed)
    }
}

impl Default for ResultStatus {
    fn default() -> Self {
        ResultStatus::Other(String::new())
    }
}

impl From<String> for ResultStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "PENDING" => ResultStatus::Pending,
            "COMPLETED" => ResultStatus::Completed,
            "FAILED" => ResultStatus::Failed,
            _ => ResultStatus::Other(s),
        }
    }
}

impl From<ResultStatus> for String {
    fn from(status: ResultStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 1ファイル分の処理結果
///
/// 各フィールドは型が合わなければ未指定として扱う（1件の崩れで他の結果を落とさない）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadResult {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<ResultId>,
    #[serde(deserialize_with = "lenient")]
    pub filename: Option<String>,
    #[serde(deserialize_with = "lenient_status")]
    pub status: ResultStatus,
    #[serde(deserialize_with = "lenient")]
    pub final_text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub error: Option<String>,
}

/// `/api/upload/` の成功レスポンス
///
/// `results` が null・配列以外なら空。オブジェクトでない要素は空の結果になる。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadResponse {
    #[serde(deserialize_with = "lenient_results")]
    pub results: Vec<UploadResult>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_status<'de, D>(deserializer: D) -> Result<ResultStatus, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::<D, String>(deserializer)?
        .map(ResultStatus::from)
        .unwrap_or_default())
}

fn lenient_results<'de, D>(deserializer: D) -> Result<Vec<UploadResult>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect())
}

/// 失敗レスポンスのエラー本文（`detail` または `error`）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub detail: Option<String>,
    pub error: Option<String>,
}

impl ErrorBody {
    /// 空でない最初のメッセージ（detail優先）
    pub fn message(&self) -> Option<&str> {
        [self.detail.as_deref(), self.error.as_deref()]
            .into_iter()
            .flatten()
            .find(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_result_deserialize_completed() {
        let json = r#"{
            "id": 12,
            "status": "COMPLETED",
            "imageUrl": "/media/uploads/a.png",
            "filename": "scan.png",
            "finalText": "hello",
            "error": null
        }"#;

        let result: UploadResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.id, Some(ResultId::Number(12)));
        assert_eq!(result.status, ResultStatus::Completed);
        assert_eq!(result.filename.as_deref(), Some("scan.png"));
        assert_eq!(result.final_text.as_deref(), Some("hello"));
        assert_eq!(result.image_url.as_deref(), Some("/media/uploads/a.png"));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_upload_result_missing_fields() {
        let result: UploadResult = serde_json::from_str("{}").unwrap();
        assert!(result.id.is_none());
        assert!(result.filename.is_none());
        assert_eq!(result.status.as_str(), "");
        assert!(!result.status.is_completed());
    }

    #[test]
    fn test_unknown_status_preserved() {
        let result: UploadResult =
            serde_json::from_str(r#"{"status": "QUEUED"}"#).unwrap();
        assert_eq!(result.status, ResultStatus::Other("QUEUED".into()));
        assert_eq!(result.status.to_string(), "QUEUED");

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"status\":\"QUEUED\""));
    }

    #[test]
    fn test_null_and_mistyped_fields_become_absent() {
        let result: UploadResult = serde_json::from_str(
            r#"{"id": null, "status": null, "filename": 42, "finalText": ["x"], "error": "boom"}"#,
        )
        .unwrap();
        assert!(result.id.is_none());
        assert_eq!(result.status, ResultStatus::default());
        assert!(result.filename.is_none());
        assert!(result.final_text.is_none());
        assert_eq!(result.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_results_null_or_not_array() {
        let response: UploadResponse = serde_json::from_str(r#"{"results": null}"#).unwrap();
        assert!(response.results.is_empty());

        let response: UploadResponse = serde_json::from_str(r#"{"results": {"a": 1}}"#).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_non_object_entry_becomes_empty_result() {
        let response: UploadResponse =
            serde_json::from_str(r#"{"results": [7, {"status": "COMPLETED"}]}"#).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0], UploadResult::default());
        assert_eq!(response.results[1].status, ResultStatus::Completed);
    }

    #[test]
    fn test_result_id_display() {
        assert_eq!(ResultId::Number(7).to_string(), "7");
        assert_eq!(ResultId::Text("abc".into()).to_string(), "abc");
    }

    #[test]
    fn test_upload_response_without_results() {
        let response: UploadResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_error_body_prefers_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "bad request", "error": "other"}"#).unwrap();
        assert_eq!(body.message(), Some("bad request"));
    }

    #[test]
    fn test_error_body_skips_empty_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "", "error": "disk full"}"#).unwrap();
        assert_eq!(body.message(), Some("disk full"));

        let empty = ErrorBody::default();
        assert_eq!(empty.message(), None);
    }
}
