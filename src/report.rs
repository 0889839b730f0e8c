//! 結果の端末表示とテキスト保存

use crate::error::Result;
use ocr_upload_common::view::NO_RESULTS_MESSAGE;
use ocr_upload_common::{ResultBody, ResultView, ResultsPanel};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 結果エリアの内容を書き出す
pub fn render_panel(panel: &ResultsPanel, out: &mut impl Write) -> std::io::Result<()> {
    match panel {
        ResultsPanel::Hidden => Ok(()),
        ResultsPanel::Items(views) => {
            for (i, view) in views.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                render_item(view, out)?;
            }
            Ok(())
        }
        ResultsPanel::NoResults => writeln!(out, "{}", NO_RESULTS_MESSAGE),
        ResultsPanel::Failed(message) => writeln!(out, "Error: {}", message),
    }
}

fn render_item(view: &ResultView, out: &mut impl Write) -> std::io::Result<()> {
    let mark = if view.succeeded { "✔" } else { "✖" };
    writeln!(out, "{} {} [{}]", mark, view.filename, view.badge_text)?;

    if let Some(image) = &view.image {
        writeln!(out, "  画像: {}", image.src)?;
    }

    match &view.body {
        ResultBody::Text { text, .. } => {
            for line in text.lines() {
                writeln!(out, "  {}", line)?;
            }
        }
        ResultBody::Error(message) => writeln!(out, "  エラー: {}", message)?,
    }
    Ok(())
}

/// 成功した結果のテキストをダウンロードと同じファイル名で保存する
///
/// 同名になった場合は後の結果で上書きされる。
pub fn save_texts(views: &[ResultView], dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut saved = Vec::new();
    for actions in views.iter().filter_map(ResultView::actions) {
        let path = dir.join(&actions.download_name);
        std::fs::write(&path, &actions.text)?;
        saved.push(path);
    }
    Ok(saved)
}
