//! 解析結果のレンダリング
//!
//! どの形式も `Analysis` (ルート一覧と集計) だけを入力にする。

mod console;
mod json;
mod listing;
mod markdown;

pub use console::render_console;
pub use json::render_json;
pub use listing::render_listing;
pub use markdown::render_markdown;

use crate::Analysis;
use crate::config::ReportFormat;
use crate::error::Result;

/// 指定形式でレポート文字列を作る
pub fn render(format: ReportFormat, analysis: &Analysis, color: bool) -> Result<String> {
    match format {
        ReportFormat::Console => Ok(render_console(&analysis.summary, color)),
        ReportFormat::Json => render_json(analysis),
        ReportFormat::Markdown => Ok(render_markdown(&analysis.summary)),
    }
}

/// "/" はそのまま、それ以外は先頭に "/" を付ける
fn prefix_label(prefix: &str) -> String {
    if prefix == "/" {
        prefix.to_string()
    } else {
        format!("/{prefix}")
    }
}

fn path_label(path: Option<&str>) -> &str {
    path.unwrap_or("(no path)")
}
