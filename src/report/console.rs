use colored::Colorize;
use std::fmt::Write;

use super::{path_label, prefix_label};
use crate::summary::Summary;

/// ツリー形式のテキストレポート
///
/// 順序: 件数 → 重複名 → パス接頭辞 → flag 付きページ → 共有コンポーネント → 種類別
pub fn render_console(summary: &Summary, color: bool) -> String {
    let mut out = String::new();

    writeln!(out, "\n{}", heading("📦 Route asset analysis", color)).unwrap();
    writeln!(out, "├─ Total routes: {}", summary.total).unwrap();
    writeln!(out, "├─ Named routes: {}", summary.named).unwrap();
    writeln!(out, "├─ Unnamed routes: {}", summary.unnamed).unwrap();
    writeln!(out, "├─ With keepAlive: {}", summary.with_keep_alive).unwrap();
    writeln!(out, "├─ Dynamic components: {}", summary.dynamic_component).unwrap();
    writeln!(out, "├─ With props: {}", summary.has_props).unwrap();

    writeln!(out, "├─ Duplicate names:").unwrap();
    for (name, count) in summary.duplicate_names() {
        let line = format!("⚠️  {name} ({count} times)");
        writeln!(out, "│    {}", warning(&line, color)).unwrap();
    }

    writeln!(out, "├─ Path prefixes:").unwrap();
    for (prefix, count) in summary.prefix_map.iter() {
        writeln!(out, "│    {} - {}", prefix_label(prefix), count).unwrap();
    }

    if !summary.flags.is_empty() {
        writeln!(out, "├─ Flagged pages:").unwrap();
        for flagged in &summary.flags {
            writeln!(
                out,
                "│    {}  => flag={}",
                path_label(flagged.path.as_deref()),
                flagged.flag
            )
            .unwrap();
        }
    }

    let reused: Vec<_> = summary.reused_components().collect();
    if !reused.is_empty() {
        writeln!(out, "├─ Reused components:").unwrap();
        for (component, count) in reused {
            writeln!(out, "│    {component} ({count} routes)").unwrap();
        }
    }

    writeln!(out, "└─ Route types:").unwrap();
    for (kind, paths) in summary.type_map.iter() {
        writeln!(out, "     {} ({})", kind.keyword(), paths.len()).unwrap();
        for path in paths {
            writeln!(out, "       - {path}").unwrap();
        }
    }

    writeln!(out, "\n{}", heading("✅ Analysis complete", color)).unwrap();
    out
}

fn heading(text: &str, color: bool) -> String {
    if color {
        text.green().bold().to_string()
    } else {
        text.to_string()
    }
}

fn warning(text: &str, color: bool) -> String {
    if color {
        text.yellow().to_string()
    } else {
        text.to_string()
    }
}
