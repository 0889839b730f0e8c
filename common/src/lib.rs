//! OCR Upload Common Library
//!
//! CLIとWeb(WASM)で共有される型・入力選別・応答解釈・表示モデル

pub mod types;
pub mod error;
pub mod selection;
pub mod protocol;
pub mod view;
pub mod download;
pub mod session;

pub use types::{ErrorBody, ResultId, ResultStatus, UploadResponse, UploadResult};
pub use error::{Error, Result};
pub use selection::{is_image_media_type, select_images, Selection, UploadBatch, UploadCandidate};
pub use protocol::{interpret_reply, BatchOutcome, HttpReply, IMAGES_FIELD, UPLOAD_ENDPOINT};
pub use view::{build_views, ImagePreview, ResultActions, ResultBody, ResultView};
pub use download::download_file_name;
pub use session::{ResultsPanel, UploadSession};
