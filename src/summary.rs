// src/summary.rs
//! ルート一覧から集計値を計算する

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{FlaggedRoute, RouteRecord};

/// パスに含まれるキーワードで判定するルートの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    List,
    Detail,
    Edit,
    Add,
    View,
}

impl RouteKind {
    pub const ALL: [RouteKind; 5] = [
        RouteKind::List,
        RouteKind::Detail,
        RouteKind::Edit,
        RouteKind::Add,
        RouteKind::View,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            RouteKind::List => "list",
            RouteKind::Detail => "detail",
            RouteKind::Edit => "edit",
            RouteKind::Add => "add",
            RouteKind::View => "view",
        }
    }

    /// 小文字化したパスにキーワードが含まれるか
    pub fn matches(self, path: &str) -> bool {
        path.to_lowercase().contains(self.keyword())
    }
}

/// 挿入順を保持するキー → 出現回数のマップ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CountMap(IndexMap<String, usize>);

impl CountMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// キーが無ければ 0 で作ってから 1 足す
    pub fn increment(&mut self, key: &str) {
        match self.0.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.0.insert(key.to_string(), 1);
            }
        }
    }

    pub fn get(&self, key: &str) -> usize {
        self.0.get(key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// 2 回以上現れたキーだけ (挿入順)
    pub fn repeated(&self) -> impl Iterator<Item = (&str, usize)> {
        self.iter().filter(|(_, count)| *count > 1)
    }
}

/// 種類ごとのマッチしたパス一覧。5 種類すべてのキーを常に持つ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeMap(IndexMap<RouteKind, Vec<String>>);

impl Default for TypeMap {
    fn default() -> Self {
        TypeMap(RouteKind::ALL.iter().map(|kind| (*kind, Vec::new())).collect())
    }
}

impl TypeMap {
    pub fn paths(&self, kind: RouteKind) -> &[String] {
        self.0.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (RouteKind, &[String])> {
        self.0.iter().map(|(kind, paths)| (*kind, paths.as_slice()))
    }

    fn push(&mut self, kind: RouteKind, path: &str) {
        self.0.entry(kind).or_default().push(path.to_string());
    }
}

/// ルート資産の集計結果
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    pub named: usize,
    pub unnamed: usize,
    pub with_keep_alive: usize,
    pub dynamic_component: usize,
    pub has_props: usize,
    pub flags: Vec<FlaggedRoute>,
    /// ルート名 → 出現回数 (2 以上は名前の衝突)
    pub name_count_map: CountMap,
    /// コンポーネント → 使用回数 (`"dynamic"` は数えない)
    pub component_count_map: CountMap,
    /// パスの先頭セグメント → 出現回数
    pub prefix_map: CountMap,
    pub type_map: TypeMap,
}

impl Summary {
    /// 全ルートを 1 回なめて集計する
    pub fn from_routes(routes: &[RouteRecord]) -> Self {
        let mut summary = Summary {
            total: routes.len(),
            ..Default::default()
        };

        for route in routes {
            match &route.name {
                Some(name) => {
                    summary.named += 1;
                    summary.name_count_map.increment(name);
                }
                None => summary.unnamed += 1,
            }

            if route
                .meta_value("keepAlive")
                .is_some_and(|value| value.is_truthy())
            {
                summary.with_keep_alive += 1;
            }

            if let Some(flag) = route.meta_value("flag").filter(|value| value.is_truthy()) {
                summary.flags.push(FlaggedRoute {
                    path: route.path.clone(),
                    flag: flag.clone(),
                });
            }

            if route.is_dynamic() {
                summary.dynamic_component += 1;
            } else if let Some(component) = &route.component {
                summary.component_count_map.increment(component);
            }

            if route.has_props {
                summary.has_props += 1;
            }

            summary.prefix_map.increment(prefix_of(route.path.as_deref()));

            if let Some(path) = &route.path {
                for kind in RouteKind::ALL {
                    if kind.matches(path) {
                        summary.type_map.push(kind, path);
                    }
                }
            }
        }

        summary
    }

    /// 2 回以上使われたルート名
    pub fn duplicate_names(&self) -> impl Iterator<Item = (&str, usize)> {
        self.name_count_map.repeated()
    }

    /// 複数ルートで共有されているコンポーネント
    pub fn reused_components(&self) -> impl Iterator<Item = (&str, usize)> {
        self.component_count_map.repeated()
    }
}

/// パスの先頭セグメント (1 つ目と 2 つ目の `/` の間)。取れなければ `"/"`
///
/// 例: "/user/detail" → "user"、"/" → "/"、None → "/"
pub fn prefix_of(path: Option<&str>) -> &str {
    path.and_then(|p| p.split('/').nth(1))
        .filter(|segment| !segment.is_empty())
        .unwrap_or("/")
}
