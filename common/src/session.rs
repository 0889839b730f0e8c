//! アップロードバッチの状態管理
//!
//! 読み込み表示と結果エリアの状態をDOMから切り離して持つ。
//! 送信中は新しいバッチを受け付けない。

use crate::error::{Error, Result};
use crate::protocol::BatchOutcome;
use crate::selection::{Selection, UploadBatch, UploadCandidate};
use crate::view::{build_views, ResultView};

/// 結果エリアの表示内容
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResultsPanel {
    #[default]
    Hidden,
    Items(Vec<ResultView>),
    NoResults,
    Failed(String),
}

impl ResultsPanel {
    pub fn is_visible(&self) -> bool {
        !matches!(self, ResultsPanel::Hidden)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UploadSession {
    loading: bool,
    panel: ResultsPanel,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 読み込み表示中か（バッチ開始から終了処理まで）
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// ドロップ・ファイル選択を受け付けるか
    pub fn accepts_input(&self) -> bool {
        !self.loading
    }

    pub fn panel(&self) -> &ResultsPanel {
        &self.panel
    }

    /// バッチを開始する
    ///
    /// 送信中なら `Error::BatchInFlight` で状態は変えない。
    /// それ以外は前回の結果を消し、画像が1件もなければ `Error::NoValidImages`。
    pub fn begin<T: UploadCandidate>(&mut self, selection: Selection<T>) -> Result<UploadBatch<T>> {
        if self.loading {
            return Err(Error::BatchInFlight);
        }

        self.panel = ResultsPanel::Hidden;
        let batch = UploadBatch::new(selection.accepted)?;
        self.loading = true;
        Ok(batch)
    }

    /// 応答（または失敗）を反映し、読み込み表示を終える
    pub fn finish(&mut self, outcome: Result<BatchOutcome>) {
        self.panel = match outcome {
            Ok(BatchOutcome::Results(results)) => ResultsPanel::Items(build_views(&results)),
            Ok(BatchOutcome::NoResults) => ResultsPanel::NoResults,
            Err(e) => ResultsPanel::Failed(e.to_string()),
        };
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::select_images;
    use crate::selection::tests::{file, FakeFile};
    use crate::types::{ResultId, ResultStatus, UploadResult};

    fn images_only() -> Selection<FakeFile> {
        select_images(vec![file("a.png", "image/png"), file("b.txt", "text/plain")])
    }

    fn result(id: i64, status: ResultStatus) -> UploadResult {
        UploadResult {
            id: Some(ResultId::Number(id)),
            filename: Some(format!("{}.png", id)),
            status,
            ..Default::default()
        }
    }

    #[test]
    fn test_begin_without_images_sends_nothing() {
        let mut session = UploadSession::new();
        let selection = select_images(vec![file("notes.txt", "text/plain")]);

        let err = session.begin(selection).unwrap_err();
        assert!(matches!(err, Error::NoValidImages));
        assert!(!session.is_loading());
        assert!(session.accepts_input());
    }

    #[test]
    fn test_begin_keeps_only_images() {
        let mut session = UploadSession::new();
        let batch = session.begin(images_only()).unwrap();

        assert_eq!(batch.files(), &[file("a.png", "image/png")]);
        assert!(session.is_loading());
        assert!(!session.accepts_input());
    }

    #[test]
    fn test_begin_clears_previous_results() {
        let mut session = UploadSession::new();
        session.begin(images_only()).unwrap();
        session.finish(Ok(BatchOutcome::NoResults));
        assert!(session.panel().is_visible());

        session.begin(images_only()).unwrap();
        assert_eq!(session.panel(), &ResultsPanel::Hidden);
    }

    #[test]
    fn test_second_batch_rejected_while_in_flight() {
        let mut session = UploadSession::new();
        session.begin(images_only()).unwrap();

        let err = session.begin(images_only()).unwrap_err();
        assert!(matches!(err, Error::BatchInFlight));
        assert!(session.is_loading());
    }

    #[test]
    fn test_loading_ends_on_success() {
        let mut session = UploadSession::new();
        session.begin(images_only()).unwrap();
        assert!(session.is_loading());

        session.finish(Ok(BatchOutcome::Results(vec![
            result(1, ResultStatus::Completed),
            result(2, ResultStatus::Failed),
        ])));

        assert!(!session.is_loading());
        let ResultsPanel::Items(views) = session.panel() else {
            panic!("結果が表示されるはず");
        };
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].key, "1");
        assert!(views[0].succeeded);
        assert_eq!(views[1].key, "2");
        assert!(!views[1].succeeded);
    }

    #[test]
    fn test_loading_ends_on_failure() {
        let mut session = UploadSession::new();
        session.begin(images_only()).unwrap();

        session.finish(Err(Error::UploadFailed("disk full".to_string())));

        assert!(!session.is_loading());
        assert_eq!(session.panel(), &ResultsPanel::Failed("disk full".to_string()));
    }

    #[test]
    fn test_empty_results_placeholder() {
        let mut session = UploadSession::new();
        session.begin(images_only()).unwrap();
        session.finish(Ok(BatchOutcome::NoResults));
        assert_eq!(session.panel(), &ResultsPanel::NoResults);
    }
}
