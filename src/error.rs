// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// ルート解析処理の Result 型
pub type Result<T> = std::result::Result<T, Error>;

/// 解析中に発生しうるエラー
///
/// `routes` 配列が見つからない場合や、ルート要素の形が想定外の場合はエラーにならない。
/// 致命的なのは入力ファイルが読めない場合と、ソースが構文解析できない場合だけ。
#[derive(Debug, Error)]
pub enum Error {
    /// 指定されたルーターファイルが存在しない
    #[error("router file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// ディレクトリ内にルーター定義らしきファイルが見つからない
    #[error("no router module found under {}", dir.display())]
    NoRouterModule { dir: PathBuf },

    /// ファイル読み込み・パス解決の I/O エラー
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// ソースが構文解析できない (パーサのメッセージをそのまま保持)
    #[error("parse error in {file}: {message}")]
    Parse { file: String, message: String },

    /// JSON レポートのシリアライズ失敗
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
