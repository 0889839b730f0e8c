//! 入力ファイルの選別とバッチ化
//!
//! ドロップ・ファイル選択・CLI引数のいずれから来たファイルも
//! `UploadCandidate` として扱い、メディアタイプが `image/` で始まるものだけを残す。

use crate::error::{Error, Result};

/// アップロード候補のファイル
///
/// ブラウザでは `web_sys::File`、CLIではローカルファイルが実装する。
pub trait UploadCandidate {
    /// 元のファイル名
    fn file_name(&self) -> String;

    /// 申告されたメディアタイプ（不明なら空文字）
    fn media_type(&self) -> String;
}

/// 画像として受け付けるメディアタイプか
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

/// 選別結果。除外したファイル名は呼び出し側で診断ログに出す。
#[derive(Debug)]
pub struct Selection<T> {
    pub accepted: Vec<T>,
    pub skipped: Vec<String>,
}

/// 画像だけを元の順序のまま残す
pub fn select_images<T, I>(candidates: I) -> Selection<T>
where
    T: UploadCandidate,
    I: IntoIterator<Item = T>,
{
    let mut accepted = Vec::new();
    let mut skipped = Vec::new();

    for candidate in candidates {
        if is_image_media_type(&candidate.media_type()) {
            accepted.push(candidate);
        } else {
            skipped.push(candidate.file_name());
        }
    }

    Selection { accepted, skipped }
}

/// 1回の送信にまとめる画像ファイル群（1件以上）
#[derive(Debug)]
pub struct UploadBatch<T> {
    files: Vec<T>,
}

impl<T: UploadCandidate> UploadBatch<T> {
    /// 画像が1件もなければ `Error::NoValidImages`
    pub fn new(files: Vec<T>) -> Result<Self> {
        if files.is_empty() {
            return Err(Error::NoValidImages);
        }
        Ok(Self { files })
    }

    pub fn files(&self) -> &[T] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn into_files(self) -> Vec<T> {
        self.files
    }
}
