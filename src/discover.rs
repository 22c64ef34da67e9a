// src/discover.rs

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 探索しないディレクトリ
const SKIPPED_DIRS: &[&str] = &["node_modules", "dist", "build", ".git", ".output"];

const SCRIPT_EXTENSIONS: &[&str] = &["js", "mjs", "ts", "mts", "jsx", "tsx"];

/// ディレクトリ配下からルーター定義ファイルを探す
///
/// 次のいずれかに一致するファイルを候補とし、浅い階層・パス順で最初のものを返す:
/// - `router/index.{js,ts,…}`
/// - `router.{js,ts,…}` / `routes.{js,ts,…}`
pub fn find_router_file(dir: &Path) -> Option<PathBuf> {
    let mut candidates: Vec<(usize, PathBuf)> = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_router_module(e.path()))
        .map(|e| (e.depth(), e.into_path()))
        .collect();

    candidates.sort();
    candidates.into_iter().map(|(_, path)| path).next()
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

fn is_router_module(path: &Path) -> bool {
    let has_script_ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext));
    if !has_script_ext {
        return false;
    }

    let stem = path.file_stem().and_then(|s| s.to_str());
    let parent = path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str());

    match stem {
        Some("router" | "routes") => true,
        Some("index") => parent == Some("router"),
        _ => false,
    }
}
