use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadCliError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("パスが見つかりません: {0}")]
    PathNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Upload(#[from] ocr_upload_common::Error),

    #[error("アップロード失敗: {0}")]
    BatchFailed(String),
}

pub type Result<T> = std::result::Result<T, UploadCliError>;
