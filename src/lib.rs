//! SPA ルーター定義の静的解析
//!
//! `routes` という名前の配列リテラルを swc で読み取り、ルートを深さ優先で平坦化して
//! 件数・重複名・パス接頭辞・meta フラグ・種類別などを集計する。
//!
//! 流れ: ソース → [`parser`] → [`syntax::Node`] → [`extractor`] → [`summary`] → [`report`]

pub mod config;
pub mod discover;
pub mod error;
pub mod extractor;
pub mod model;
pub mod parser;
pub mod report;
pub mod summary;
pub mod syntax;

use std::fs;
use std::path::Path;
use tracing::debug;

pub use config::{AnalyzeOptions, ReportFormat, SyntaxMode};
pub use error::{Error, Result};
pub use model::{FlaggedRoute, MetaValue, RouteRecord};
pub use parser::ParseSyntax;
pub use summary::{CountMap, RouteKind, Summary};

/// 1 ファイル分の解析結果
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// `routes` という変数宣言が見つかったか
    pub routes_found: bool,
    /// 宣言順・深さ優先のルート一覧
    pub routes: Vec<RouteRecord>,
    pub summary: Summary,
}

/// ソース文字列を解析する
///
/// 構文エラーだけが `Err`。`routes` が無い場合は空の結果 (`routes_found == false`) を返す。
pub fn analyze_source(source: &str, file: Option<&Path>, syntax: ParseSyntax) -> Result<Analysis> {
    let module = parser::parse_module(source, file, syntax)?;

    let binding = parser::find_routes_binding(&module);
    // 警告を出すかどうかは呼び出し側が決める
    if binding.is_none() {
        debug!(
            "no `{}` variable declaration found",
            parser::ROUTES_BINDING
        );
    }

    let routes = binding
        .as_ref()
        .map(extractor::extract_routes)
        .unwrap_or_default();
    let summary = Summary::from_routes(&routes);
    debug!(total = summary.total, named = summary.named, "summary computed");

    Ok(Analysis {
        routes_found: binding.is_some(),
        routes,
        summary,
    })
}

/// ファイルを読み込んで解析する
pub fn analyze_file(path: &Path, syntax: ParseSyntax) -> Result<Analysis> {
    if !path.is_file() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let source = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(file = %path.display(), bytes = source.len(), ?syntax, "parsing router module");

    analyze_source(&source, Some(path), syntax)
}
