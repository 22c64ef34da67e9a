// src/model.rs
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// 遅延ロードだが import 先を特定できなかったコンポーネントの代替値
pub const DYNAMIC_COMPONENT: &str = "dynamic";

/// `routes` 配列から抽出した 1 ルート分の情報
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    /// ルートのパス (例: "/user/list")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// ルート名 (例: "UserList")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `() => import("…")` の import 先、`"dynamic"`、または識別子名
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,

    /// meta オブジェクトの中身 (宣言順)
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub meta: IndexMap<String, MetaValue>,

    /// `props` キーが宣言されているか
    pub has_props: bool,
}

impl RouteRecord {
    pub fn meta_value(&self, key: &str) -> Option<&MetaValue> {
        self.meta.get(key)
    }

    pub fn is_dynamic(&self) -> bool {
        self.component.as_deref() == Some(DYNAMIC_COMPONENT)
    }
}

/// meta の値。真偽値リテラルだけはそのまま保持し、それ以外は文字列になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetaValue {
    Bool(bool),
    Text(String),
}

impl MetaValue {
    /// JavaScript の truthy 判定と同じ
    pub fn is_truthy(&self) -> bool {
        match self {
            MetaValue::Bool(value) => *value,
            MetaValue::Text(text) => !text.is_empty(),
        }
    }
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Bool(value) => write!(f, "{value}"),
            MetaValue::Text(text) => f.write_str(text),
        }
    }
}

/// `meta.flag` を持つルート
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlaggedRoute {
    pub path: Option<String>,
    pub flag: MetaValue,
}
