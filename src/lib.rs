//! OCR Upload CLI
//!
//! 共通ライブラリの入力選別・応答解釈を使い、ローカルの画像を送信する

pub mod cli;
pub mod config;
pub mod error;
pub mod scanner;
pub mod client;
pub mod report;
