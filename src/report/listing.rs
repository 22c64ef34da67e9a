use std::fmt::Write;

use crate::model::RouteRecord;

/// ルートごとの一覧 (名前・パス・コンポーネント・meta)
pub fn render_listing(routes: &[RouteRecord]) -> String {
    let mut out = String::new();
    for route in routes {
        writeln!(out, "\n📌 Route Name: {}", route.name.as_deref().unwrap_or("-")).unwrap();
        writeln!(out, "📍 Path: {}", route.path.as_deref().unwrap_or("-")).unwrap();
        writeln!(
            out,
            "📦 Component: {}",
            route.component.as_deref().unwrap_or("-")
        )
        .unwrap();
        if !route.meta.is_empty() {
            // MetaValue は bool か文字列なので失敗しない
            let meta = serde_json::to_string(&route.meta).unwrap_or_default();
            writeln!(out, "🧩 Meta: {meta}").unwrap();
        }
    }
    out
}
