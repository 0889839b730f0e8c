//! コピー・ダウンロード操作の共通部分

/// コピーボタンの通常ラベル
pub const COPY_LABEL: &str = "Copy Text";

/// コピー成功直後のラベル
pub const COPIED_LABEL: &str = "Copied!";

/// `COPIED_LABEL` を表示しておく時間（ミリ秒）
pub const COPIED_LABEL_MS: u32 = 2_000;

/// ダウンロードファイルのMIMEタイプ
pub const DOWNLOAD_MIME: &str = "text/plain;charset=utf-8";

/// ダウンロード用のファイル名を作る
///
/// `[a-z0-9.]`（大文字小文字を問わない）以外を `_` に置き換えて小文字化し、
/// 空なら `download`、最後に必ず `.txt` を付ける。元が `.txt` でも二重になる。
/// 置換はUTF-16コード単位ごとに行う（サロゲートペアは `__` になる）。
pub fn download_file_name(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '.' {
            sanitized.push(c.to_ascii_lowercase());
        } else {
            for _ in 0..c.len_utf16() {
                sanitized.push('_');
            }
        }
    }

    if sanitized.is_empty() {
        sanitized.push_str("download");
    }
    sanitized.push_str(".txt");
    sanitized
}
