//! 結果1件分の表示モデル
//!
//! 表示要素（画像・テキスト・エラー）の出し分けはステータスと
//! `imageUrl` / `finalText` / `error` の有無だけで決まる。

use crate::download::download_file_name;
use crate::types::{ResultId, UploadResult};

pub const UNKNOWN_FILE: &str = "Unknown File";
pub const NO_TEXT_PLACEHOLDER: &str = "(No text extracted)";
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";
pub const NO_RESULTS_MESSAGE: &str = "No results were returned.";

/// 画像プレビュー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub src: String,
    pub alt: String,
}

/// コピー・ダウンロード操作の対象
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultActions {
    /// クリップボード・ファイルに書き出すテキスト（なければ空）
    pub text: String,
    /// サニタイズ済みのダウンロードファイル名
    pub download_name: String,
}

/// ステータスに応じた本文
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultBody {
    Text { text: String, actions: ResultActions },
    Error(String),
}

/// 結果1件の表示モデル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub key: String,
    pub filename: String,
    pub badge_text: String,
    pub succeeded: bool,
    pub image: Option<ImagePreview>,
    pub body: ResultBody,
}

impl ResultView {
    /// `position` はバッチ内の順番（IDがない結果のキーに使う）
    pub fn new(result: &UploadResult, position: usize) -> Self {
        let succeeded = result.status.is_completed();
        let filename = non_empty(&result.filename)
            .unwrap_or(UNKNOWN_FILE)
            .to_string();

        // 0・空文字のIDもID無しと同じ扱い
        let key = match &result.id {
            Some(ResultId::Number(n)) if *n != 0 => n.to_string(),
            Some(ResultId::Text(s)) if !s.is_empty() => s.clone(),
            _ => format!("error-{}", position),
        };

        let image = non_empty(&result.image_url).map(|src| {
            let label = non_empty(&result.filename)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Image {}", id_label(result.id.as_ref())));
            ImagePreview {
                src: src.to_string(),
                alt: if succeeded {
                    label
                } else {
                    format!("Failed: {}", label)
                },
            }
        });

        let body = if succeeded {
            let text = non_empty(&result.final_text)
                .unwrap_or(NO_TEXT_PLACEHOLDER)
                .to_string();
            let source_name = non_empty(&result.filename)
                .map(str::to_string)
                .unwrap_or_else(|| format!("result-{}.txt", id_label(result.id.as_ref())));
            ResultBody::Text {
                text,
                actions: ResultActions {
                    text: result.final_text.clone().unwrap_or_default(),
                    download_name: download_file_name(&source_name),
                },
            }
        } else {
            ResultBody::Error(non_empty(&result.error).unwrap_or(UNKNOWN_ERROR).to_string())
        };

        Self {
            key,
            filename,
            badge_text: result.status.to_string(),
            succeeded,
            image,
            body,
        }
    }

    /// バッジのクラス
    pub fn badge_class(&self) -> &'static str {
        if self.succeeded {
            "status-badge badge bg-success"
        } else {
            "status-badge badge bg-danger"
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.body {
            ResultBody::Text { text, .. } => Some(text),
            ResultBody::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.body {
            ResultBody::Error(message) => Some(message),
            ResultBody::Text { .. } => None,
        }
    }

    pub fn actions(&self) -> Option<&ResultActions> {
        match &self.body {
            ResultBody::Text { actions, .. } => Some(actions),
            ResultBody::Error(_) => None,
        }
    }
}

/// バッチの全結果をサーバー順に表示モデルへ
pub fn build_views(results: &[UploadResult]) -> Vec<ResultView> {
    results
        .iter()
        .enumerate()
        .map(|(i, result)| ResultView::new(result, i))
        .collect()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn id_label(id: Option<&ResultId>) -> String {
    id.map(ToString::to_string)
        .unwrap_or_else(|| "null".to_string())
}
