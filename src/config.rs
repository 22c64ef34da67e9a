// src/config.rs

use clap::ValueEnum;
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

use crate::discover::find_router_file;
use crate::error::{Error, Result};
use crate::parser::ParseSyntax;

/// レポートの出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// ツリー形式のテキスト
    #[default]
    Console,
    /// `{ summary, routeItems }` の JSON
    Json,
    Markdown,
}

/// 構文の指定。`Auto` は拡張子から判定する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SyntaxMode {
    #[default]
    Auto,
    Ecma,
    Typescript,
    Tsx,
}

impl SyntaxMode {
    pub fn resolve(self, path: &Path) -> ParseSyntax {
        match self {
            SyntaxMode::Auto => ParseSyntax::for_path(path),
            SyntaxMode::Ecma => ParseSyntax::Ecma,
            SyntaxMode::Typescript => ParseSyntax::TypeScript,
            SyntaxMode::Tsx => ParseSyntax::Tsx,
        }
    }
}

/// 1 回の解析実行の設定 (CLI 引数から組み立てる)
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// ルーター定義ファイル、またはそれを含むディレクトリ
    pub input: PathBuf,
    pub format: ReportFormat,
    /// 出力先ファイル。None なら標準出力
    pub out: Option<PathBuf>,
    pub syntax: SyntaxMode,
    /// 集計ではなくルートごとの一覧を出す
    pub list: bool,
    pub color: bool,
}

impl AnalyzeOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            format: ReportFormat::default(),
            out: None,
            syntax: SyntaxMode::default(),
            list: false,
            color: true,
        }
    }

    /// 入力パスを絶対パス化し、ディレクトリならルーター定義ファイルを探す
    pub fn resolve_input(&self) -> Result<PathBuf> {
        let path = self
            .input
            .absolutize()
            .map_err(|source| Error::Io {
                path: self.input.clone(),
                source,
            })?
            .to_path_buf();

        if path.is_dir() {
            return find_router_file(&path).ok_or(Error::NoRouterModule { dir: path });
        }
        if !path.is_file() {
            return Err(Error::FileNotFound { path });
        }
        Ok(path)
    }
}
