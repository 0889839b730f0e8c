//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// Displayの文字列はそのままエラー表示ブロックに出す。
#[derive(Error, Debug)]
pub enum Error {
    #[error("No valid image files selected.")]
    NoValidImages,

    #[error("An upload is already in progress.")]
    BatchInFlight,

    /// HTTPステータスが成功以外
    #[error("{0}")]
    UploadFailed(String),

    #[error("Received non-JSON response from server.")]
    NonJsonResponse,

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// 通信そのものの失敗（fetch拒否、接続不可など）
    #[error("{0}")]
    Transport(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
