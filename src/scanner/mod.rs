//! アップロード対象のローカルファイル収集
//!
//! フォルダは直下のみ（`recursive` で再帰）。メディアタイプは拡張子から決める。

use crate::error::{UploadCliError, Result};
use ocr_upload_common::UploadCandidate;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq)]
pub struct LocalFile {
    pub path: PathBuf,
    pub file_name: String,
    pub media_type: String,
}

impl LocalFile {
    pub fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            file_name,
            media_type: media_type_for(path).to_string(),
        }
    }
}

impl UploadCandidate for LocalFile {
    fn file_name(&self) -> String {
        self.file_name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }
}

const MEDIA_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("heic", "image/heic"),
    ("svg", "image/svg+xml"),
    ("pdf", "application/pdf"),
    ("txt", "text/plain"),
    ("json", "application/json"),
];

/// 拡張子（大文字小文字は無視）からメディアタイプを決める。不明なら空文字。
pub fn media_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension() else {
        return "";
    };
    let ext = ext.to_string_lossy().to_ascii_lowercase();
    MEDIA_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or("")
}

/// 引数のパスからファイルを集める（指定順、フォルダ内はファイル名順）
pub fn collect_files(paths: &[PathBuf], recursive: bool) -> Result<Vec<LocalFile>> {
    let mut files = Vec::new();

    for path in paths {
        if !path.exists() {
            return Err(UploadCliError::PathNotFound(path.display().to_string()));
        }

        if path.is_file() {
            files.push(LocalFile::from_path(path));
            continue;
        }

        let mut entries: Vec<LocalFile> = WalkDir::new(path)
            .max_depth(if recursive { usize::MAX } else { 1 })
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| LocalFile::from_path(e.path()))
            .collect();

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        files.extend(entries);
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_media_type_for() {
        assert_eq!(media_type_for(Path::new("a.png")), "image/png");
        assert_eq!(media_type_for(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(media_type_for(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(media_type_for(Path::new("doc.pdf")), "application/pdf");
        assert_eq!(media_type_for(Path::new("README")), "");
        assert_eq!(media_type_for(Path::new("archive.xyz")), "");
    }

    #[test]
    fn test_collect_files_not_found() {
        let result = collect_files(&[PathBuf::from("/nonexistent/folder")], false);
        assert!(matches!(result, Err(UploadCliError::PathNotFound(_))));
    }

    #[test]
    fn test_collect_files_folder_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("c.png"), b"c").unwrap();
        fs::write(dir.path().join("a.jpg"), b"a").unwrap();
        fs::write(dir.path().join("b.txt"), b"b").unwrap();

        let files = collect_files(&[dir.path().to_path_buf()], false).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.txt", "c.png"]);
        assert_eq!(files[1].media_type, "text/plain");
    }

    #[test]
    fn test_collect_files_recursive() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(dir.path().join("top.png"), b"t").unwrap();
        fs::write(sub.join("deep.png"), b"d").unwrap();

        let shallow = collect_files(&[dir.path().to_path_buf()], false).unwrap();
        assert_eq!(shallow.len(), 1);

        let deep = collect_files(&[dir.path().to_path_buf()], true).unwrap();
        assert_eq!(deep.len(), 2);
    }

    #[test]
    fn test_collect_files_keeps_argument_order() {
        let dir = tempdir().unwrap();
        let b = dir.path().join("b.png");
        let a = dir.path().join("a.png");
        fs::write(&b, b"b").unwrap();
        fs::write(&a, b"a").unwrap();

        let files = collect_files(&[b.clone(), a.clone()], false).unwrap();
        assert_eq!(files[0].path, b);
        assert_eq!(files[1].path, a);
    }
}
