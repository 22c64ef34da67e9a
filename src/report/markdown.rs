use std::fmt::Write;

use super::{path_label, prefix_label};
use crate::summary::Summary;

/// コンソールレポートと同じ内容の Markdown
pub fn render_markdown(summary: &Summary) -> String {
    let mut out = String::new();

    writeln!(out, "# Route Asset Report\n").unwrap();

    writeln!(out, "## Totals\n").unwrap();
    writeln!(out, "| Metric | Count |").unwrap();
    writeln!(out, "|---|---|").unwrap();
    for (label, count) in [
        ("Total routes", summary.total),
        ("Named routes", summary.named),
        ("Unnamed routes", summary.unnamed),
        ("With keepAlive", summary.with_keep_alive),
        ("Dynamic components", summary.dynamic_component),
        ("With props", summary.has_props),
    ] {
        writeln!(out, "| {label} | {count} |").unwrap();
    }

    writeln!(out, "\n## Duplicate Names\n").unwrap();
    write_counts(
        &mut out,
        summary.duplicate_names().map(|(name, count)| (name.to_string(), count)),
    );

    writeln!(out, "\n## Path Prefixes\n").unwrap();
    write_counts(
        &mut out,
        summary
            .prefix_map
            .iter()
            .map(|(prefix, count)| (prefix_label(prefix), count)),
    );

    writeln!(out, "\n## Flagged Routes\n").unwrap();
    if summary.flags.is_empty() {
        writeln!(out, "_None_").unwrap();
    }
    for flagged in &summary.flags {
        writeln!(
            out,
            "- `{}`: flag = `{}`",
            path_label(flagged.path.as_deref()),
            flagged.flag
        )
        .unwrap();
    }

    writeln!(out, "\n## Reused Components\n").unwrap();
    write_counts(
        &mut out,
        summary
            .reused_components()
            .map(|(component, count)| (component.to_string(), count)),
    );

    writeln!(out, "\n## Route Types").unwrap();
    for (kind, paths) in summary.type_map.iter() {
        writeln!(out, "\n### {} ({})\n", kind.keyword(), paths.len()).unwrap();
        if paths.is_empty() {
            writeln!(out, "_None_").unwrap();
        }
        for path in paths {
            writeln!(out, "- `{path}`").unwrap();
        }
    }

    out
}

fn write_counts(out: &mut String, entries: impl Iterator<Item = (String, usize)>) {
    let mut empty = true;
    for (label, count) in entries {
        empty = false;
        writeln!(out, "- `{label}`: {count}").unwrap();
    }
    if empty {
        writeln!(out, "_None_").unwrap();
    }
}
